use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "NETEXPLORER_CONFIG_PATH";

const DEFAULT_CONFIG_PATH: &str = "/var/lib/netexplorer/config.json";

/// Top-level application config, stored as JSON on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        serde_json::from_str("{}").unwrap()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Root directory for static assets (stylesheet, favicon).
    #[serde(default = "default_site_root")]
    pub site_root: String,
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".into()
}

fn default_site_root() -> String {
    "target/site".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        serde_json::from_str("{}").unwrap()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL of the mixnet directory server.
    #[serde(default = "default_directory_url")]
    pub base_url: String,

    /// Per-request timeout for directory calls, in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_directory_url() -> String {
    "http://127.0.0.1:8080".into()
}

fn default_request_timeout_ms() -> u64 {
    5000
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        serde_json::from_str("{}").unwrap()
    }
}

impl Config {
    /// Resolve the config file path from the environment, or the default.
    pub fn path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load the config from `path`. A missing file yields the defaults;
    /// a file that exists but fails to parse is an error.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config as pretty JSON, atomically (tmp file + rename).
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let data = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, data)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, path)
            .with_context(|| format!("Failed to move config into place at {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.server.site_root, "target/site");
        assert_eq!(config.directory.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.directory.request_timeout_ms, 5000);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"directory": {"base_url": "https://directory.example"}}"#)
                .unwrap();
        assert_eq!(config.directory.base_url, "https://directory.example");
        assert_eq!(config.directory.request_timeout_ms, 5000);
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.server.listen_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from_file(&path).is_err());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.server.listen_addr = "127.0.0.1:4000".into();
        config.directory.base_url = "https://directory.example".into();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.listen_addr, "127.0.0.1:4000");
        assert_eq!(loaded.directory.base_url, "https://directory.example");
        assert!(!path.with_extension("json.tmp").exists());
    }
}
