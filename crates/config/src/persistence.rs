//! File system persistence for feed configuration
//!
//! Reading validates before returning; writing validates first and then
//! goes through a temporary file and an atomic rename so a half-written
//! config never replaces a good one.

use crate::error::{ConfigError, ConfigResult};
use crate::FeedConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Reads and writes a feed config file
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for the given config file path
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads and validates the config file
    ///
    /// Empty files count as corrupted, and invalid values fail the load.
    pub fn load(&self) -> ConfigResult<FeedConfig> {
        let contents =
            fs::read_to_string(&self.config_path).map_err(|e| ConfigError::Read {
                path: self.config_path.clone(),
                source: e,
            })?;

        if contents.trim().is_empty() {
            return Err(ConfigError::Empty {
                path: self.config_path.clone(),
            });
        }

        let config: FeedConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: self.config_path.clone(),
                source: e,
            })?;

        if let Err(errors) = config.validate() {
            for error in &errors {
                log::warn!("{}: {}", self.config_path.display(), error);
            }
            return Err(ConfigError::Invalid(errors));
        }

        log::info!(
            "Loaded feed config '{}' from {}",
            config.channel.title,
            self.config_path.display()
        );
        Ok(config)
    }

    /// Saves the config atomically
    pub fn save(&self, config: &FeedConfig) -> ConfigResult<()> {
        if let Err(errors) = config.validate() {
            return Err(ConfigError::Invalid(errors));
        }

        let dir = match self.config_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        self.ensure_directory_exists(&dir)?;

        let toml_string = toml::to_string_pretty(config)?;

        let temp_file = NamedTempFile::new_in(&dir).map_err(|e| ConfigError::Write {
            path: dir.clone(),
            source: e,
        })?;
        self.write_atomic(temp_file, &toml_string)?;

        log::info!("Config saved to {}", self.config_path.display());
        Ok(())
    }

    fn ensure_directory_exists(&self, path: &Path) -> ConfigResult<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| ConfigError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::info!("Created config directory: {}", path.display());
        }
        Ok(())
    }

    fn write_atomic(&self, mut temp_file: NamedTempFile, content: &str) -> ConfigResult<()> {
        let write_error = |e| ConfigError::Write {
            path: self.config_path.clone(),
            source: e,
        };

        temp_file.write_all(content.as_bytes()).map_err(write_error)?;
        temp_file.flush().map_err(write_error)?;
        temp_file
            .persist(&self.config_path)
            .map_err(|e| write_error(e.error))?;

        Ok(())
    }
}
