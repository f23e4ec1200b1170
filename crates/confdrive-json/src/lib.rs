//! JSON driver for configuration files
//!
//! Reads a JSON file into a [`ConfigData`](confdrive_core::ConfigData) document and writes one back.
//! The driver registers under the `"json"` tag and claims the `.json`
//! extension.
//!
//! # Example
//!
//! ```no_run
//! use confdrive_json::JsonConfigurationDriver;
//! use confdrive_core::ConfigurationDriver;
//! use std::path::Path;
//!
//! let driver = JsonConfigurationDriver::new();
//! let config = driver.load(Path::new("settings.json"))?;
//! driver.save(Path::new("settings.json"), &config)?;
//! # Ok::<(), confdrive_core::ConfigError>(())
//! ```

pub mod driver;
pub mod options;

pub use driver::JsonConfigurationDriver;
pub use options::JsonDriverOptions;

use confdrive_core::{DriverRegistry, Result};
use std::sync::Arc;

/// Registry with the JSON driver registered under its tag
pub fn registry_with_json() -> Result<DriverRegistry> {
    DriverRegistry::new().with_driver(Arc::new(JsonConfigurationDriver::new()))
}

/// Register a JSON driver with custom options into an existing registry
pub fn register(registry: &mut DriverRegistry, options: JsonDriverOptions) -> Result<()> {
    registry.register(Arc::new(JsonConfigurationDriver::with_options(options)?))
}
