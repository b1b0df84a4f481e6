//! Paths under `~/.flyvibe/`.

use std::fs;
use std::io;
use std::path::PathBuf;

const APP_DIR: &str = ".flyvibe";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "flyvibe.log";

/// Get the `~/.flyvibe/` directory path, creating it if needed.
pub fn flyvibe_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(APP_DIR);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Default config location. Not created; a missing file means defaults.
pub fn default_config_path() -> io::Result<PathBuf> {
    Ok(flyvibe_dir()?.join(CONFIG_FILE))
}

pub fn log_path() -> io::Result<PathBuf> {
    Ok(flyvibe_dir()?.join(LOG_FILE))
}
