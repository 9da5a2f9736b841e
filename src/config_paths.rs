//! Where checkline keeps its files
//!
//! Everything lives under one application directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/checkline/` or `~/.config/checkline/`
//! - Windows: `%APPDATA%\checkline\`

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "checkline";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// The application directory, if the platform exposes a config location
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        env::var_os("APPDATA").map(PathBuf::from)
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|base| base.join(APP_DIR))
}

/// Path of the YAML settings file
pub fn config_file() -> Option<PathBuf> {
    Some(config_dir()?.join(CONFIG_FILE))
}

/// Directory holding the rolling log files
pub fn logs_dir() -> Option<PathBuf> {
    Some(config_dir()?.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs).map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}
