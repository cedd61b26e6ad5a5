use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

pub const CONFIG_PATH_ENV: &str = "STOCKROOM_CONFIG_PATH";
pub const DATA_HOME_ENV: &str = "STOCKROOM_DATA_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides the product database location.
    pub db_path: Option<PathBuf>,
    /// Initial window size in logical points.
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            window_size: [1000.0, 640.0],
        }
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    parse_config(&contents).unwrap_or_else(|err| {
        log::warn!("Ignoring malformed config {}: {}", path.display(), err);
        AppConfig::default()
    })
}

pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(contents)
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub fn app_data_dir() -> PathBuf {
    data_dir_from(std::env::var_os(DATA_HOME_ENV))
}

/// Data directory given the value of `STOCKROOM_DATA_HOME`, if any.
pub fn data_dir_from(data_home: Option<OsString>) -> PathBuf {
    if let Some(path) = data_home {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Stockroom");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Stockroom");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("stockroom");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("stockroom");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".stockroom")
}
