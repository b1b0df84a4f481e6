//! Utility modules: build info, app paths and logging setup.

pub mod app_dir;
pub mod build_info;
pub mod logging;

pub use app_dir::{default_config_path, flyvibe_dir, log_path};
