//! Driver contract and registry for configuration files
//!
//! This crate defines the seam between a configuration framework and the
//! drivers that read and write individual file formats:
//! - [`ConfigurationDriver`], the load/save contract every format implements
//! - [`ConfigData`], the decoded document a driver hands back
//! - [`ConfigError`], one error taxonomy shared by all drivers
//! - [`DriverRegistry`], explicit tag and extension based driver lookup
//!
//! # Example
//!
//! ```no_run
//! use confdrive_core::{ConfigData, DriverRegistry};
//! use std::path::Path;
//!
//! fn reload(registry: &DriverRegistry) -> confdrive_core::Result<ConfigData> {
//!     registry.load(Path::new("settings.json"))
//! }
//! ```

pub mod data;
pub mod driver;
pub mod error;
pub mod registry;
pub mod validation;

pub use data::{ConfigData, TopLevelKind};
pub use driver::ConfigurationDriver;
pub use error::{ConfigError, Result};
pub use registry::DriverRegistry;
pub use validation::Validate;
