//! Encoding options for the JSON driver

use confdrive_core::validation::validate_range;
use confdrive_core::{Result, Validate};
use serde::{Deserialize, Serialize};

/// How the JSON driver writes documents.
///
/// The defaults produce compact output with no trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonDriverOptions {
    /// Pretty-print on save
    pub pretty: bool,

    /// Spaces per indent level when pretty-printing
    pub indent: usize,

    /// Append a newline after the document
    pub trailing_newline: bool,
}

impl Default for JsonDriverOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: 4,
            trailing_newline: false,
        }
    }
}

impl JsonDriverOptions {
    /// Pretty-printed output with `indent` spaces and a trailing newline
    pub fn pretty(indent: usize) -> Self {
        Self {
            pretty: true,
            indent,
            trailing_newline: true,
        }
    }
}

impl Validate for JsonDriverOptions {
    fn validate(&self) -> Result<()> {
        validate_range("indent", self.indent, 1, 16)
    }
}
