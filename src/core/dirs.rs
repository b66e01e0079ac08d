use crate::core::error::NavigatorError;
use std::path::PathBuf;

const APP_DIR_NAME: &str = "repo-navigator";

pub fn get_config_directory() -> Result<PathBuf, NavigatorError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config"))),
        "macos" => dirs::home_dir().map(|home| home.join("Library/Application Support")),
        _ => dirs::config_dir(),
    };

    base.map(|base| base.join(APP_DIR_NAME))
        .ok_or(NavigatorError::ConfigDirectoryNotFound)
}
