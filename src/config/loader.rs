//! Configuration loading and management

use crate::config::types::Contention;
use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Top-level larder configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub contention: Contention,
    /// Display label overrides, keyed by label name (`save`, `delete`, ...).
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if let Some((key, _)) = self.labels.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(Error::ConfigValidation(format!(
                "label '{key}' must not be empty"
            )));
        }
        Ok(())
    }

    /// Loads configuration from `path`.
    ///
    /// A directory is searched for the names in `CONFIG_FILENAMES`, in order.
    /// A file is parsed as YAML when its extension is `yaml`/`yml`, JSON otherwise.
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.is_file() {
            return Self::load_file(path);
        }

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = path.join(config_file_name);
            if config_file_path.exists() {
                return Self::load_file(&config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            path: path.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    fn load_file(path: &Path) -> Result<Self> {
        log::debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }
}
