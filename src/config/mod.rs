//! Configuration loading for the employee import engine.
//!
//! This module loads the runner configuration (input file, store snapshot,
//! HTTP bind address) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use employee_import::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./import.yaml").unwrap();
//! println!("Input: {}", config.config().input_path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_INPUT_PATH, DEFAULT_LISTEN_ADDR, ImportConfig};
