//! Driver contract for configuration file formats

use crate::{ConfigData, Result};
use std::fmt::Debug;
use std::path::Path;

/// A pluggable driver that loads and saves configuration files of one format.
///
/// Drivers hold no per-call state, so one instance can be shared across
/// threads and reused for any number of files.
pub trait ConfigurationDriver: Send + Sync + Debug {
    /// Tag the driver is registered under (e.g. `"json"`)
    fn tag(&self) -> &'static str;

    /// File extensions, without the leading dot, routed to this driver
    fn extensions(&self) -> &'static [&'static str];

    /// Whether [`save`](Self::save) is supported
    fn can_save(&self) -> bool;

    /// Read and decode the file at `path`
    fn load(&self, path: &Path) -> Result<ConfigData>;

    /// Encode `data` and write it to `path`, replacing any existing content
    fn save(&self, path: &Path, data: &ConfigData) -> Result<()>;
}
