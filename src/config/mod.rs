//! TOML configuration for a [`LogHandler`].
//!
//! ```toml
//! level  = "info"
//! colors = false
//! prefix = "svc"
//! output = "~/.local/state/app/app.log"
//! groups = ["app"]
//!
//! [attrs]
//! svc = "api"
//!
//! [[attr_levels]]
//! key   = "debug_id"
//! value = "trace1"
//! level = "debug"
//! ```

mod structs;

pub use structs::AttrLevelConfig;

use crate::attr::{Attr, Value};
use crate::handler::LogHandler;
use crate::internal;
use crate::level::Level;
use crate::sink::Sink;
use chrono::DateTime;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Every field is optional; an empty file yields the same handler as `LogHandler::new()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum level, in any form `Level::from_str` accepts.
    pub level: String,
    pub colors: bool,
    /// Adds `file:line` to each line.
    pub source: bool,
    /// Attribute key rendered in front of the message.
    pub prefix: Option<String>,
    /// `stdout`, `stderr`, or a file path (`~` and `$VARS` expanded, appended to).
    pub output: String,
    /// Group path applied after `attrs`.
    pub groups: Vec<String>,
    /// Carried attributes in file order; tables become groups.
    pub attrs: toml::Table,
    /// Override table entries in registration order.
    pub attr_levels: Vec<AttrLevelConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            colors: true,
            source: false,
            prefix: None,
            output: "stdout".to_string(),
            groups: Vec::new(),
            attrs: toml::Table::new(),
            attr_levels: Vec::new(),
        }
    }
}

impl FromStr for Config {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Config {
    /// Reads `<config dir>/hlog/hlog.toml`; a missing file yields defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        let path = Self::get_config_path()?;
        Self::load_from(&path)
    }

    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug(
                "config",
                &format!("{} not found, using defaults", path.display()),
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = content.parse()?;
        internal::debug("config", &format!("loaded {}", path.display()));
        Ok(config)
    }

    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("hlog").join("hlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// # Errors
    /// `InvalidLevel` for an unparseable `level`.
    pub fn parse_level(&self) -> Result<Level, crate::Error> {
        Ok(self.level.parse()?)
    }

    /// # Errors
    /// `InvalidPath` if the output path can't be expanded, I/O errors opening it.
    pub fn sink(&self) -> Result<Sink, crate::Error> {
        match self.output.trim() {
            "" | "stdout" => Ok(Sink::stdout()),
            "stderr" => Ok(Sink::stderr()),
            path => {
                let expanded = shellexpand::full(path)
                    .map_err(|e| crate::Error::InvalidPath(e.to_string()))?;
                Sink::file(&*expanded).inspect_err(|e| {
                    internal::error("config", &format!("cannot open {expanded}: {e}"));
                })
            }
        }
    }

    /// Applies every setting to a fresh handler. Attributes are added before
    /// groups, overrides last, each in file order.
    ///
    /// # Errors
    /// Invalid levels, unexpandable output paths, and I/O errors opening a file output.
    pub fn build(&self) -> Result<LogHandler, crate::Error> {
        let mut handler = LogHandler::new()
            .with_level(self.parse_level()?)
            .with_writer(self.sink()?);

        if !self.colors {
            handler = handler.without_color();
        }
        if self.source {
            handler = handler.with_source();
        }
        if let Some(prefix) = &self.prefix {
            handler = handler.with_prefix(prefix);
        }

        handler = handler.with_attrs(
            self.attrs
                .iter()
                .map(|(key, value)| Attr::new(key.clone(), toml_value(value))),
        );

        for group in &self.groups {
            handler = handler.with_group(group);
        }

        for entry in &self.attr_levels {
            let level: Level = entry.level.parse()?;
            handler = handler.with_attr_level(
                Attr::new(entry.key.clone(), toml_value(&entry.value)),
                level,
            );
        }

        Ok(handler)
    }
}

/// Datetimes without an offset have no instant, so they stay text.
fn toml_value(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(n) => Value::Int(*n),
        toml::Value::Float(n) => Value::Float(*n),
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(dt) => {
            let text = dt.to_string();
            match DateTime::parse_from_rfc3339(&text) {
                Ok(t) => Value::Time(t),
                Err(_) => Value::String(text),
            }
        }
        toml::Value::Table(table) => Value::Group(
            table
                .iter()
                .map(|(key, v)| Attr::new(key.clone(), toml_value(v)))
                .collect(),
        ),
        toml::Value::Array(_) => {
            internal::warn("config", "array attribute values are kept as text");
            Value::String(value.to_string())
        }
    }
}
