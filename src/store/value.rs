//! Heterogeneous configuration values
//!
//! Values originate from an override capability that the base crate does
//! not know at compile time, so the store is untyped by design. Callers
//! know the expected shape of each key and use the checked accessors.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Configuration value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Array(Vec<ConfigValue>),
    Table(HashMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Get the value as a string slice, if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, if it is one
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a float, if it is one
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as an array, if it is one
    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Array(values) => Some(values),
            _ => None,
        }
    }

    /// Get the value as a table, if it is one
    pub fn as_table(&self) -> Option<&HashMap<String, ConfigValue>> {
        match self {
            ConfigValue::Table(table) => Some(table),
            _ => None,
        }
    }

    /// Name of the value's type, for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Array(_) => "array",
            ConfigValue::Table(_) => "table",
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Integer(n)
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Integer(n as i64)
    }
}

impl From<u32> for ConfigValue {
    fn from(n: u32) -> Self {
        ConfigValue::Integer(n as i64)
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Boolean(b)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(values: Vec<ConfigValue>) -> Self {
        ConfigValue::Array(values)
    }
}

impl From<HashMap<String, ConfigValue>> for ConfigValue {
    fn from(table: HashMap<String, ConfigValue>) -> Self {
        ConfigValue::Table(table)
    }
}

impl TryFrom<serde_json::Value> for ConfigValue {
    type Error = ConfigError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Null => Err(ConfigError::value_conversion(
                "JSON null has no configuration value counterpart",
            )),
            serde_json::Value::Bool(b) => Ok(ConfigValue::Boolean(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(ConfigValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(ConfigValue::Float(f))
                } else {
                    Err(ConfigError::value_conversion(format!(
                        "JSON number {} does not fit i64 or f64",
                        n
                    )))
                }
            },
            serde_json::Value::String(s) => Ok(ConfigValue::String(s)),
            serde_json::Value::Array(values) => {
                let converted: Result<Vec<_>, _> =
                    values.into_iter().map(ConfigValue::try_from).collect();
                Ok(ConfigValue::Array(converted?))
            },
            serde_json::Value::Object(map) => {
                let mut table = HashMap::with_capacity(map.len());
                for (key, value) in map {
                    table.insert(key, ConfigValue::try_from(value)?);
                }
                Ok(ConfigValue::Table(table))
            },
        }
    }
}

impl From<ConfigValue> for serde_json::Value {
    fn from(value: ConfigValue) -> Self {
        match value {
            ConfigValue::String(s) => serde_json::Value::String(s),
            ConfigValue::Integer(n) => serde_json::Value::Number(n.into()),
            ConfigValue::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                // Non-finite floats have no JSON representation
                .unwrap_or(serde_json::Value::Null),
            ConfigValue::Boolean(b) => serde_json::Value::Bool(b),
            ConfigValue::Array(values) => {
                serde_json::Value::Array(values.into_iter().map(Into::into).collect())
            },
            ConfigValue::Table(table) => serde_json::Value::Object(
                table.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => write!(f, "{}", s),
            ConfigValue::Integer(n) => write!(f, "{}", n),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
            other => {
                let json = serde_json::Value::from(other.clone());
                write!(f, "{}", json)
            },
        }
    }
}
