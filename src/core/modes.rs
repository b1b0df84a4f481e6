//! Game modes and their physics/scoring modifiers.

use crate::render::Rgba;
use serde::{Deserialize, Serialize};

/// Player-selectable game mode. Selection survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Normal,
    Extreme,
    Stormy,
    Impossible,
}

/// Multipliers a mode applies on top of the base tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeParams {
    pub speed_multiplier: f64,
    pub gravity_multiplier: f64,
    pub points_multiplier: f64,
    /// Only stormy mode schedules weather effects.
    pub weather: bool,
}

impl GameMode {
    pub const ALL: [GameMode; 4] = [
        GameMode::Normal,
        GameMode::Extreme,
        GameMode::Stormy,
        GameMode::Impossible,
    ];

    pub fn params(self) -> ModeParams {
        match self {
            Self::Normal => ModeParams {
                speed_multiplier: 1.0,
                gravity_multiplier: 0.25,
                points_multiplier: 1.0,
                weather: false,
            },
            Self::Extreme => ModeParams {
                speed_multiplier: 1.5,
                gravity_multiplier: 1.2,
                points_multiplier: 2.0,
                weather: false,
            },
            Self::Stormy => ModeParams {
                speed_multiplier: 1.2,
                gravity_multiplier: 0.6,
                points_multiplier: 3.0,
                weather: true,
            },
            Self::Impossible => ModeParams {
                speed_multiplier: 2.0,
                gravity_multiplier: 1.5,
                points_multiplier: 5.0,
                weather: false,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Extreme => "EXTREME",
            Self::Stormy => "STORMY",
            Self::Impossible => "IMPOSSIBLE",
        }
    }

    /// Accent color for the mode label, selection outline and select burst.
    pub fn color(self) -> Rgba {
        match self {
            Self::Normal => Rgba::rgb(100, 255, 100),
            Self::Extreme => Rgba::rgb(255, 200, 0),
            Self::Stormy => Rgba::rgb(120, 160, 255),
            Self::Impossible => Rgba::rgb(255, 50, 50),
        }
    }

    /// Index into [`GameMode::ALL`]; out-of-range falls back to Normal.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// Parse a mode name case-insensitively (used by the CLI).
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl std::str::FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!("unknown mode '{s}' (expected normal, extreme, stormy or impossible)")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_stormy_has_weather() {
        for mode in GameMode::ALL {
            assert_eq!(mode.params().weather, mode == GameMode::Stormy);
        }
    }

    #[test]
    fn test_from_index_falls_back_to_normal() {
        assert_eq!(GameMode::from_index(1), GameMode::Extreme);
        assert_eq!(GameMode::from_index(99), GameMode::Normal);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(GameMode::parse("stormy"), Some(GameMode::Stormy));
        assert_eq!(GameMode::parse(" Impossible "), Some(GameMode::Impossible));
        assert_eq!(GameMode::parse("sideways"), None);
        assert_eq!("EXTREME".parse::<GameMode>(), Ok(GameMode::Extreme));
        assert!("sideways".parse::<GameMode>().is_err());
    }

    #[test]
    fn test_harder_modes_pay_more() {
        let normal = GameMode::Normal.params().points_multiplier;
        let impossible = GameMode::Impossible.params().points_multiplier;
        assert!(impossible > normal);
    }
}
