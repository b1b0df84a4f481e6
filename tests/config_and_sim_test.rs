//! Integration test: TOML config and the headless simulator
//!
//! Partial config files override only what they name, bad files are rejected
//! with a typed error and replaced by defaults at start-up, and simulator
//! runs are reproducible from a seed.

use flyvibe::core::{ConfigError, GameConfig, GameMode};
use flyvibe::simulator::{run_simulation, SimConfig};
use std::path::{Path, PathBuf};

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "flyvibe-{}-{}.toml",
        name,
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn test_partial_toml_overrides_only_named_keys() {
    let toml = r#"
[vehicle]
flap_strength = -3.5

[environment]
day_length_ticks = 3600
"#;
    let config = GameConfig::from_toml_str(toml, Path::new("inline.toml")).unwrap();
    let defaults = GameConfig::default();

    assert_eq!(config.vehicle.flap_strength, -3.5);
    assert_eq!(config.environment.day_length_ticks, 3600);
    assert_eq!(config.vehicle.gravity, defaults.vehicle.gravity);
    assert_eq!(config.pipes, defaults.pipes);
    assert_eq!(config.session, defaults.session);
}

#[test]
fn test_out_of_range_value_is_rejected() {
    let err = GameConfig::from_toml_str("[world]\nwidth = -1.0\n", Path::new("bad.toml"))
        .unwrap_err();
    match err {
        ConfigError::Invalid { field, value, .. } => {
            assert_eq!(field, "world.width");
            assert_eq!(value, -1.0);
        }
        other => panic!("expected Invalid, got {other:?}"),
    }
}

#[test]
fn test_malformed_file_falls_back_to_defaults() {
    let path = temp_config("malformed", "[vehicle\nflap_strength = ");
    assert!(matches!(GameConfig::load(&path), Err(ConfigError::Parse { .. })));
    assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_file_uses_defaults() {
    let path = std::env::temp_dir().join("flyvibe-definitely-missing.toml");
    assert!(matches!(GameConfig::load(&path), Err(ConfigError::Io { .. })));
    assert_eq!(GameConfig::load_or_default(&path), GameConfig::default());
}

#[test]
fn test_printed_config_loads_back() {
    let mut config = GameConfig::default();
    config.session.ad_duration_ms = 3000;
    let path = temp_config("printed", &config.to_toml());
    assert_eq!(GameConfig::load(&path).unwrap(), config);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_simulation_is_reproducible() {
    let sim = SimConfig::quick(4, 2024, GameMode::Normal);
    let game = GameConfig::default();

    let a = run_simulation(&sim, &game);
    let b = run_simulation(&sim, &game);

    assert_eq!(a.num_runs, 4);
    assert_eq!(a.runs, b.runs);
    assert_eq!(a.runs_crashed + a.runs_timed_out, 4);
    assert!(a.max_score >= a.mean_score);
}

#[test]
fn test_simulation_report_formats() {
    let sim = SimConfig::quick(3, 11, GameMode::Stormy);
    let report = run_simulation(&sim, &GameConfig::default());

    let text = report.to_text();
    assert!(text.contains("STORMY"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(json["num_runs"], 3);
    assert!(json.get("runs").is_none());
    let medals: u64 = json["medal_distribution"]
        .as_object()
        .unwrap()
        .values()
        .map(|v| v.as_u64().unwrap())
        .sum();
    assert_eq!(medals, 3);
}
