//! Configuration loading and management

use crate::constants::{CONFIG_FILENAMES, DEFAULT_PREFIX, DEFAULT_SUFFIX};
use crate::encoding::Encoding;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Naming and decoding settings shared by every loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "get_default_prefix")]
    pub prefix: String,
    #[serde(default = "get_default_suffix")]
    pub suffix: String,
    #[serde(default)]
    pub encoding: Encoding,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            prefix: get_default_prefix(),
            suffix: get_default_suffix(),
            encoding: Encoding::default(),
        }
    }
}

impl LoaderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.suffix.contains('/') || self.suffix.contains('\\') {
            return Err(Error::ConfigError(format!(
                "suffix '{}' must not contain path separators",
                self.suffix
            )));
        }
        if self.prefix.contains('\0') || self.suffix.contains('\0') {
            return Err(Error::ConfigError("prefix and suffix must not contain NUL".into()));
        }
        Ok(())
    }

    /// Reads the first config file found in `config_dir`.
    ///
    /// Candidates are tried in the order of [`CONFIG_FILENAMES`].
    pub fn load_config<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = config_dir.join(config_file_name);
            if config_file_path.is_file() {
                log::debug!("Loading loader config from '{}'", config_file_path.display());
                return Self::from_file(config_file_path);
            }
        }

        Err(Error::ConfigNotFound {
            config_dir: config_dir.display().to_string(),
            config_files: CONFIG_FILENAMES.join(", "),
        })
    }

    /// Reads a single config file, picking the format from its extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: LoaderConfig = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => {
                return Err(Error::ConfigError(format!(
                    "unsupported config format '{}'",
                    path.display()
                )))
            }
        };
        config.validate()?;
        Ok(config)
    }
}

fn get_default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn get_default_suffix() -> String {
    DEFAULT_SUFFIX.to_string()
}
