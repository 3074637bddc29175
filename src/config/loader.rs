use std::path::Path;

use crate::error::{NotifyOffensesError, Result};

use super::Config;

pub const LOCAL_CONFIG_NAME: &str = ".notify-offenses.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location, falling back to defaults
    /// when no config file is present.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigLoader for FileConfigLoader {
    fn load(&self) -> Result<Config> {
        let local = Path::new(LOCAL_CONFIG_NAME);
        if local.exists() {
            self.load_from_path(local)
        } else {
            Ok(Config::default())
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| NotifyOffensesError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
