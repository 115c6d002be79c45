//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the import
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{ImportError, ImportResult};

use super::types::ImportConfig;

/// Loads and provides access to the import configuration.
///
/// # File format
///
/// ```yaml
/// input_path: data/employes.csv
/// store_path: data/employees.json
/// listen_addr: 0.0.0.0:8080
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_import::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./import.yaml")?;
/// println!("Importing {}", loader.config().input_path.display());
/// # Ok::<(), employee_import::error::ImportError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ImportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the YAML file at `path`.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`ImportConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ImportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|message| ImportError::ConfigParseError {
            path: path_str,
            message,
        })
    }

    /// Loads the file at `path` if given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> ImportResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn from_yaml(content: &str) -> Result<Self, String> {
        // An empty file is a valid, all-defaults configuration.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str::<ImportConfig>(content).map_err(|e| e.to_string())?;
        Ok(Self { config })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ImportConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), content).unwrap();
        file
    }

    #[test]
    fn test_load_full_configuration() {
        let file = write_config(
            "input_path: data/employes.csv\nstore_path: data/employees.json\nlisten_addr: 0.0.0.0:8080\n",
        );

        let loader = ConfigLoader::load(file.path()).unwrap();
        let config = loader.config();
        assert_eq!(config.input_path, PathBuf::from("data/employes.csv"));
        assert_eq!(config.store_path, Some(PathBuf::from("data/employees.json")));
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let file = write_config("store_path: snapshot.json\n");

        let config = ConfigLoader::load(file.path()).unwrap().into_config();
        assert_eq!(config.input_path, PathBuf::from("employes.csv"));
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        let config = ConfigLoader::load(file.path()).unwrap().into_config();
        assert_eq!(config, ImportConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/import.yaml") {
            Err(ImportError::ConfigNotFound { path }) => {
                assert!(path.contains("import.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file_returns_parse_error() {
        let file = write_config("input_path: [unclosed\n");
        assert!(matches!(
            ConfigLoader::load(file.path()),
            Err(ImportError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let loader = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(loader.config(), &ImportConfig::default());
    }
}
