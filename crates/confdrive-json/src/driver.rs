//! JSON configuration driver

use crate::JsonDriverOptions;
use confdrive_core::{ConfigData, ConfigError, ConfigurationDriver, Result, Validate};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Loads and saves configuration files as JSON.
///
/// Loading is strict: the document must be valid JSON whose top level is an
/// object or an array. Saving overwrites the target in full and makes no
/// atomicity guarantee.
#[derive(Debug, Clone, Default)]
pub struct JsonConfigurationDriver {
    options: JsonDriverOptions,
}

impl JsonConfigurationDriver {
    /// Registry tag
    pub const TAG: &'static str = "json";

    /// Create a driver with default (compact) output
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver with custom output options
    pub fn with_options(options: JsonDriverOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &JsonDriverOptions {
        &self.options
    }

    /// Encode `data` according to the driver options
    pub fn encode(&self, data: &ConfigData) -> serde_json::Result<Vec<u8>> {
        let mut out = Vec::new();

        if self.options.pretty {
            let indent = " ".repeat(self.options.indent);
            let mut ser = Serializer::with_formatter(
                &mut out,
                PrettyFormatter::with_indent(indent.as_bytes()),
            );
            data.serialize(&mut ser)?;
        } else {
            serde_json::to_writer(&mut out, data)?;
        }

        if self.options.trailing_newline {
            out.push(b'\n');
        }
        Ok(out)
    }

    /// Validate and decode raw file content. `path` is only used for errors.
    ///
    /// Syntax failures are [`ConfigError::ParseError`]. Well-formed documents
    /// the codec cannot represent (numbers beyond f64, nesting past the
    /// recursion limit) are [`ConfigError::DecodeError`].
    pub fn decode(&self, path: &Path, bytes: &[u8]) -> Result<ConfigData> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| {
            if is_unrepresentable(&e) {
                return ConfigError::decode(path, e.to_string());
            }
            let content = String::from_utf8_lossy(bytes);
            ConfigError::parse(path, &content, e.line(), e.column(), e.to_string())
        })?;

        ConfigData::try_from(value).map_err(|kind| ConfigError::decode(path, kind.to_string()))
    }
}

/// serde_json reports these limits as syntax errors; only the message tells
/// them apart.
fn is_unrepresentable(err: &serde_json::Error) -> bool {
    if !err.is_syntax() {
        return false;
    }
    let message = err.to_string();
    message.starts_with("number out of range")
        || message.starts_with("recursion limit exceeded")
}

impl ConfigurationDriver for JsonConfigurationDriver {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn can_save(&self) -> bool {
        true
    }

    fn load(&self, path: &Path) -> Result<ConfigData> {
        let bytes = fs::read(path).map_err(|e| ConfigError::read(path, e))?;
        trace!(path = %path.display(), bytes = bytes.len(), "read json configuration");

        let data = self.decode(path, &bytes)?;
        debug!(path = %path.display(), entries = data.len(), "loaded json configuration");
        Ok(data)
    }

    fn save(&self, path: &Path, data: &ConfigData) -> Result<()> {
        let bytes = self
            .encode(data)
            .map_err(|e| ConfigError::write(path, e.into()))?;

        fs::write(path, &bytes).map_err(|e| ConfigError::write(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "saved json configuration");
        Ok(())
    }
}
