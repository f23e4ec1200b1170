//! In-memory configuration documents

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Decoded contents of one configuration document.
///
/// The top level is either an ordered mapping or an ordered sequence. Nested
/// values are arbitrary JSON values and keep their key order. Build one from
/// a parsed value with `TryFrom<Value>`, which rejects scalar top levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigData {
    /// Top-level object
    Mapping(Map<String, Value>),
    /// Top-level array
    Sequence(Vec<Value>),
}

/// Kind of a top-level value that cannot form a [`ConfigData`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelKind {
    Null,
    Bool,
    Number,
    String,
}

impl fmt::Display for TopLevelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
        };
        write!(f, "top-level value is {}, expected an object or array", name)
    }
}

impl ConfigData {
    /// Empty mapping
    pub fn new() -> Self {
        Self::Mapping(Map::new())
    }

    pub fn as_mapping(&self) -> Option<&Map<String, Value>> {
        match self {
            Self::Mapping(map) => Some(map),
            Self::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::Mapping(_) => None,
            Self::Sequence(items) => Some(items),
        }
    }

    /// Look up a top-level key. Always `None` for sequences.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        match self {
            Self::Mapping(map) => map.len(),
            Self::Sequence(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Mapping(map) => Value::Object(map),
            Self::Sequence(items) => Value::Array(items),
        }
    }
}

impl Default for ConfigData {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Value> for ConfigData {
    type Error = TopLevelKind;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self::Mapping(map)),
            Value::Array(items) => Ok(Self::Sequence(items)),
            Value::Null => Err(TopLevelKind::Null),
            Value::Bool(_) => Err(TopLevelKind::Bool),
            Value::Number(_) => Err(TopLevelKind::Number),
            Value::String(_) => Err(TopLevelKind::String),
        }
    }
}

impl From<Map<String, Value>> for ConfigData {
    fn from(map: Map<String, Value>) -> Self {
        Self::Mapping(map)
    }
}

impl From<Vec<Value>> for ConfigData {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<ConfigData> for Value {
    fn from(data: ConfigData) -> Self {
        data.into_value()
    }
}
