use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub fn get_false() -> bool {
    false
}

pub fn default_parallel_threshold() -> usize {
    100_000
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "get_false")]
    pub reverse: bool,
    #[serde(default = "get_false")]
    pub unique: bool,
    #[serde(default = "get_false")]
    pub parallel: bool,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Config {
    pub const DEFAULT: &str = include_str!("../../../config/numsort.toml");

    pub fn create_default_config(overwrite: bool) -> Result<()> {
        let config = Self::get_default_location()?;
        Self::create_config_at(&config, overwrite)
    }

    pub fn create_config_at(config: &Path, overwrite: bool) -> Result<()> {
        let mut config_folder = config.to_path_buf();
        config_folder.pop();

        if !config_folder.exists() {
            fs::create_dir_all(config_folder)?;
        }

        if !config.exists() || overwrite {
            fs::write(config, Self::DEFAULT)?;
        }

        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(toml::from_str(&fs::read_to_string(path)?)?)
    }

    pub fn load_from_default_location() -> Result<Self> {
        Self::load(&Self::get_default_location()?)
    }

    /// Loads the config at `path`, falling back to the defaults when there is
    /// no file. A file that exists but does not parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {path:?}, using defaults");
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        tracing::info!("Loaded config from {path:?}");
        Ok(config)
    }

    /// Loads the config from `location` when one could be resolved. The
    /// config is optional, so an unresolvable location means defaults.
    pub fn load_from_location(location: Result<PathBuf>) -> Result<Self> {
        match location {
            Ok(path) => Self::load_or_default(&path),
            Err(err) => {
                tracing::warn!("{err}, using default config");
                Ok(Self::default())
            }
        }
    }

    pub fn get_default_location() -> Result<PathBuf> {
        let Some(directories) = directories::ProjectDirs::from("", "", "numsort") else {
            return Err(anyhow::Error::msg("Unable to find project directory"));
        };
        Ok(directories.config_dir().join("numsort.toml"))
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(Self::DEFAULT).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(!config.reverse);
        assert!(!config.unique);
        assert!(!config.parallel);
        assert_eq!(config.parallel_threshold, default_parallel_threshold());
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config: Config = toml::from_str("unique = true").unwrap();
        assert!(config.unique);
        assert!(!config.reverse);
        assert_eq!(config.parallel_threshold, 100_000);
    }

    #[test]
    fn write_and_load() {
        let dir = TempDir::new("numsort-config").unwrap();
        let path = dir.path().join("nested").join("numsort.toml");

        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());

        Config::create_config_at(&path, false).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());

        fs::write(&path, "reverse = true\nparallel_threshold = 10\n").unwrap();
        Config::create_config_at(&path, false).unwrap();
        let config = Config::load_or_default(&path).unwrap();
        assert!(config.reverse);
        assert_eq!(config.parallel_threshold, 10);

        Config::create_config_at(&path, true).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn unresolved_location_uses_defaults() {
        let location = Err(anyhow::Error::msg("Unable to find project directory"));
        assert_eq!(Config::load_from_location(location).unwrap(), Config::default());

        let dir = TempDir::new("numsort-config").unwrap();
        let path = dir.path().join("numsort.toml");
        fs::write(&path, "unique = true").unwrap();
        assert!(Config::load_from_location(Ok(path)).unwrap().unique);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = TempDir::new("numsort-config").unwrap();
        let path = dir.path().join("numsort.toml");
        fs::write(&path, "reverse = \"yes\"").unwrap();
        assert!(Config::load_or_default(&path).is_err());
    }
}
