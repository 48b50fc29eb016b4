//! Configuration struct definitions.

use serde::Deserialize;

/// One `[[attr_levels]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct AttrLevelConfig {
    /// Attribute key to match.
    pub key: String,
    /// Value the attribute must equal.
    pub value: toml::Value,
    /// Lowest level emitted for matching records.
    pub level: String,
}
