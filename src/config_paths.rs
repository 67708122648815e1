//! Where swipebar keeps its config file and logs

use std::{ffi::OsString, fs, path::PathBuf};

const APP_DIR: &str = "swipebar";

pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Prefix of the daily-rotated log files (`swipebar.log.YYYY-MM-DD`)
pub const LOG_FILE_PREFIX: &str = "swipebar.log";

/// `$XDG_CONFIG_HOME/swipebar`, else `~/.config/swipebar`; `%APPDATA%\swipebar`
/// on Windows
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        dirs::config_dir().map(|dir| dir.join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        config_dir_from(std::env::var_os("XDG_CONFIG_HOME"), dirs::home_dir())
    }
}

/// Unix lookup with the environment passed in; an empty XDG value is unset
#[cfg_attr(target_os = "windows", allow(dead_code))]
fn config_dir_from(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|root| root.join(APP_DIR))
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create directory {}: {}", logs.display(), e))?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_wins_over_home() {
        let dir = config_dir_from(Some("/xdg".into()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, Some(PathBuf::from("/xdg/swipebar")));
    }

    #[test]
    fn test_empty_xdg_falls_back_to_home() {
        let dir = config_dir_from(Some(OsString::new()), Some(PathBuf::from("/home/u")));
        assert_eq!(dir, Some(PathBuf::from("/home/u/.config/swipebar")));
    }

    #[test]
    fn test_no_home_no_dir() {
        assert_eq!(config_dir_from(None, None), None);
    }
}
