use crate::errors::{WstailError, WstailResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host (and port) of the server pushing the log stream.
    pub host: String,
    /// Use wss/https when the deployment is served over TLS.
    pub secure: bool,
    /// Path of the WebSocket log endpoint on the host.
    pub log_path: String,
    /// Path of the HTTP status endpoint on the host.
    pub status_path: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:8000".to_string(),
            secure: false,
            log_path: "/ws/logs/".to_string(),
            status_path: "/status/".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Full WebSocket URL of the log stream, scheme chosen by `secure`.
    pub fn ws_endpoint(&self) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!("{}://{}{}", scheme, self.host, self.log_path)
    }

    /// Full HTTP URL of the status endpoint, scheme chosen by `secure`.
    pub fn status_endpoint(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{}://{}{}", scheme, self.host, self.status_path)
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> WstailResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it; otherwise write out the defaults.
    let config = if config_path.exists() {
        let config = read_config_file(&config_path)?;
        validate_config(&config)?;
        config
    } else {
        let config = Config::default();
        write_config_file(&config_path, &config)?;
        config
    };

    *CONFIG.write().unwrap() = config;

    Ok(())
}

fn read_config_file(path: &Path) -> WstailResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| WstailError::config_error(format!("Failed to read config file: {}", e)))?;

    serde_json::from_str(&config_str)
        .map_err(|e| WstailError::config_error(format!("Failed to parse config: {}", e)))
}

fn write_config_file(path: &Path, config: &Config) -> WstailResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WstailError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| WstailError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| WstailError::config_error(format!("Failed to write config file: {}", e)))
}

fn get_config_path() -> WstailResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| WstailError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("wstail").join("config.json"))
}

fn validate_config(config: &Config) -> WstailResult<()> {
    if config.host.is_empty() {
        return Err(WstailError::config_error("host is required"));
    }

    if !config.log_path.starts_with('/') {
        return Err(WstailError::config_error("log_path must start with '/'"));
    }

    if !config.status_path.starts_with('/') {
        return Err(WstailError::config_error("status_path must start with '/'"));
    }

    match config.log_level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => {}
        other => {
            return Err(WstailError::config_error(format!(
                "unknown log level: {}",
                other
            )));
        }
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> WstailResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    write_config_file(&config_path, &updated_config)?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wstail").join("config.json");

        let mut config = Config::default();
        config.host = "build.example.com:9000".to_string();
        config.secure = true;

        write_config_file(&path, &config).unwrap();
        let loaded = read_config_file(&path).unwrap();

        assert_eq!(loaded.host, "build.example.com:9000");
        assert!(loaded.secure);
        assert_eq!(loaded.log_path, "/ws/logs/");
    }

    #[test]
    fn test_read_config_file_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(read_config_file(&path).is_err());
    }

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_empty_host() {
        let mut config = Config::default();
        config.host = "".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_relative_log_path() {
        let mut config = Config::default();
        config.log_path = "ws/logs/".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_unknown_log_level() {
        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_ws_endpoint_insecure() {
        let config = Config::default();
        assert_eq!(config.ws_endpoint(), "ws://127.0.0.1:8000/ws/logs/");
    }

    #[test]
    fn test_ws_endpoint_secure() {
        let mut config = Config::default();
        config.secure = true;
        config.host = "logs.example.com".to_string();
        assert_eq!(config.ws_endpoint(), "wss://logs.example.com/ws/logs/");
    }

    #[test]
    fn test_status_endpoint_follows_scheme() {
        let mut config = Config::default();
        assert_eq!(config.status_endpoint(), "http://127.0.0.1:8000/status/");
        config.secure = true;
        assert_eq!(config.status_endpoint(), "https://127.0.0.1:8000/status/");
    }
}
