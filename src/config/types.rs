//! Configuration types for the import engine.
//!
//! These structures are deserialized from a YAML configuration file. Every
//! key is optional and falls back to the defaults below.

use std::path::PathBuf;

use serde::Deserialize;

/// Default file read by the batch runner.
pub const DEFAULT_INPUT_PATH: &str = "employes.csv";

/// Default bind address of the HTTP service.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// The complete import configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// The comma-delimited employee file to import.
    pub input_path: PathBuf,
    /// JSON snapshot used as the persistent store. In-memory only when unset.
    pub store_path: Option<PathBuf>,
    /// Address the HTTP service binds to.
    pub listen_addr: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            store_path: None,
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}
