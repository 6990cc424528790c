//! Configuration loading for the CLI
//!
//! The CLI's configuration is a document holding the global `Serializable`
//! block. It is read from:
//! - the `--config` argument (or `SERIALIZABLE_CONFIG`)
//! - the first default location that exists
//! - otherwise an empty global block is used

use crate::error::{Error, Result};
use serializable_core::GlobalConfig;
use std::path::{Path, PathBuf};

/// Loaded configuration and where it came from
#[derive(Debug, Default)]
pub struct Config {
    /// The global options layer handed to the behavior
    pub global: GlobalConfig,

    /// File the configuration was read from, if any
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let global = GlobalConfig::from_file(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            global,
            source: Some(path.to_path_buf()),
        })
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_paths())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Use the first candidate that exists; unreadable candidates are skipped
    fn load_from(candidates: &[PathBuf]) -> Result<Self> {
        for path in candidates {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Skipping configuration file");
                    }
                }
            }
        }

        tracing::debug!("No configuration file found, using an empty global block");
        Ok(Self::default())
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("serializable.yaml"),
            PathBuf::from("serializable.yml"),
            PathBuf::from("serializable.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("serializable");
            paths.push(app_dir.join("config.yaml"));
            paths.push(app_dir.join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".serializable.yaml"));
            paths.push(home_dir.join(".serializable.json"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("serializable.yaml");
        fs::write(&path, "Serializable:\n  fields: [payload]\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(
            config.global.options().fields.as_deref(),
            Some(&["payload".to_string()][..])
        );
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_with_file(Some(Path::new("/nonexistent/serializable.json")));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_block() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"Serializable": {"fields": 7}}"#).unwrap();

        let result = Config::from_file(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_skips_broken_candidates() {
        let dir = TempDir::new().unwrap();
        let broken = dir.path().join("broken.json");
        let good = dir.path().join("good.yaml");
        fs::write(&broken, "{ not json").unwrap();
        fs::write(&good, "Serializable:\n  aliases: [Previous]\n").unwrap();

        let candidates = vec![dir.path().join("absent.yaml"), broken, good.clone()];
        let config = Config::load_from(&candidates).unwrap();
        assert_eq!(config.source, Some(good));
    }

    #[test]
    fn test_load_from_nothing_found() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&[dir.path().join("absent.json")]).unwrap();
        assert!(config.source.is_none());
        assert!(config.global.options().fields.is_none());
    }
}
