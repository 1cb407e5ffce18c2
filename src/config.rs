use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "kjv-site";
const CONFIG_FILE: &str = "config.json";

pub const ENV_BIND: &str = "KJV_SITE_BIND";
pub const ENV_PORT: &str = "KJV_SITE_PORT";
pub const ENV_OUT_DIR: &str = "KJV_SITE_OUT_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Address the preview server binds to
    pub bind: String,
    /// Port for the preview server
    pub port: u16,
    /// Where `render` writes the static site
    pub out_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 3000,
            out_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    /// Load the config file from the user's config directory, then apply
    /// environment overrides. A missing or broken file falls back to defaults.
    pub fn load() -> Self {
        let config = match get_config_path().and_then(|path| Self::from_file(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        };
        config.with_env(|key| std::env::var(key).ok())
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply overrides from `lookup` (the process environment in practice).
    /// Unparseable values are logged and ignored.
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(bind) = lookup(ENV_BIND) {
            self.bind = bind;
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.parse() {
                Ok(port) => self.port = port,
                Err(_) => tracing::warn!("Ignoring invalid {}: {}", ENV_PORT, port),
            }
        }
        if let Some(out_dir) = lookup(ENV_OUT_DIR) {
            self.out_dir = PathBuf::from(out_dir);
        }
        self
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn get_config_path() -> Result<PathBuf> {
    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::from_file(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "port": 8080 }"#).unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "port = 8080").unwrap();

        let err = SiteConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let config = SiteConfig::default().with_env(env(&[
            (ENV_BIND, "0.0.0.0"),
            (ENV_PORT, "4000"),
            (ENV_OUT_DIR, "/tmp/site"),
        ]));
        assert_eq!(config.address(), "0.0.0.0:4000");
        assert_eq!(config.out_dir, PathBuf::from("/tmp/site"));
    }

    #[test]
    fn test_invalid_env_port_is_ignored() {
        let config = SiteConfig::default().with_env(env(&[(ENV_PORT, "eighty")]));
        assert_eq!(config.port, 3000);
    }
}
