//! Flat key/value records destined for one `.tfvars` output file.

use std::fmt;

/// A scalar value in a config record.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    Number(i64),
    Bool(bool),
}

impl fmt::Display for ConfigValue {
    /// JSON-scalar encoding: strings double-quoted and escaped, numbers
    /// bare, booleans `true`/`false`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(value) => {
                write!(f, "{}", serde_json::Value::from(value.as_str()))
            }
            ConfigValue::Number(value) => write!(f, "{value}"),
            ConfigValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        ConfigValue::Number(i64::from(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        ConfigValue::Number(i64::from(value))
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

/// An ordered flat mapping from key to scalar, produced by one generator and
/// consumed immediately by the file emitter.
#[derive(Debug, Clone, Default)]
pub struct ConfigRecord {
    entries: Vec<(&'static str, ConfigValue)>,
}

impl ConfigRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<V: Into<ConfigValue>>(&mut self, key: &'static str, value: V) {
        self.entries.push((key, value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `key = value` line per entry, joined with newlines.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
