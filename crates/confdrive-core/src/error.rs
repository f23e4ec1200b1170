//! Error types for configuration drivers and the driver registry

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading, saving or dispatching configuration files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read configuration file: {path}\n{source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not syntactically valid for the driver's format
    #[error("Invalid configuration syntax in {path}:\n{message}\n{context}")]
    ParseError {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
        context: String,
    },

    /// The content parsed but does not form a usable configuration document
    #[error("Failed to decode configuration in {path}: {reason}")]
    DecodeError { path: PathBuf, reason: String },

    /// The file could not be written
    #[error("Failed to write configuration file: {path}\n{source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid driver option
    #[error("Validation error: {field}: {message}")]
    ValidationError { field: String, message: String },

    /// No registered driver claims the file's extension
    #[error("No configuration driver registered for file: {path}")]
    UnknownFormat { path: PathBuf },

    /// No driver registered under the tag
    #[error("No configuration driver registered with tag '{tag}'")]
    UnknownDriver { tag: String },

    /// A driver with the same tag is already registered
    #[error("A configuration driver with tag '{tag}' is already registered")]
    DuplicateDriver { tag: String },

    /// The selected driver cannot save
    #[error("Configuration driver '{tag}' cannot save {path}")]
    ReadOnlyDriver { tag: String, path: PathBuf },
}

impl ConfigError {
    /// Create a read error for `path`
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error for `path`
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a decode error for `path`
    pub fn decode(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::DecodeError {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create a parse error for `path`, rendering an excerpt of `content`
    /// around the reported position.
    pub fn parse(
        path: impl AsRef<Path>,
        content: &str,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::ParseError {
            path: path.as_ref().to_path_buf(),
            line,
            column,
            message: message.into(),
            context: source_excerpt(content, line, column),
        }
    }

    /// The file this error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ReadError { path, .. }
            | Self::ParseError { path, .. }
            | Self::DecodeError { path, .. }
            | Self::WriteError { path, .. }
            | Self::UnknownFormat { path }
            | Self::ReadOnlyDriver { path, .. } => Some(path),
            Self::ValidationError { .. }
            | Self::UnknownDriver { .. }
            | Self::DuplicateDriver { .. } => None,
        }
    }
}

/// Render the lines around `line` (1-based) with a marker on the offending
/// line and a caret under `column` (1-based, 0 means unknown).
///
/// Returns an empty string when `line` is outside the content.
pub fn source_excerpt(content: &str, line: usize, column: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();

    if line == 0 || line > lines.len() {
        return String::new();
    }

    let start = line.saturating_sub(2);
    let end = (line + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let num = start + i + 1;
            if num == line {
                let mut result = format!("→ {:3} | {}", num, text);
                if column > 0 {
                    result.push_str(&format!("\n        {}^", " ".repeat(column - 1)));
                }
                result
            } else {
                format!("  {:3} | {}", num, text)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
