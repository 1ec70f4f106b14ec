use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".wallet_core";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const FIXTURES_DIR: &str = "fixtures";

/// Returns the application data directory, defaulting to `~/.wallet_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("WALLET_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Default location for fixture overrides under `base`.
pub fn fixtures_dir_in(base: &Path) -> PathBuf {
    base.join(FIXTURES_DIR)
}
