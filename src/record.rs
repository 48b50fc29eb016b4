//! One logging event as handed to a [`Handler`](crate::Handler).

use crate::attr::Attr;
use crate::level::Level;
use chrono::{DateTime, FixedOffset, Local};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Call site of a record. Only used when a handler is configured with `with_source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Source {
    pub file: &'static str,
    pub line: u32,
}

impl Source {
    #[must_use]
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// The location of whoever called the enclosing `#[track_caller]` function.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for Source {
    fn from(loc: &'static Location<'static>) -> Self {
        Self::new(loc.file(), loc.line())
    }
}

/// `handler.rs:42` — file basename and line.
impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = Path::new(self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(self.file);
        write!(f, "{base}:{}", self.line)
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    /// `None` is the zero timestamp and renders as an empty time column.
    pub time: Option<DateTime<FixedOffset>>,
    pub level: Level,
    pub message: String,
    pub source: Option<Source>,
    pub attrs: Vec<Attr>,
}

impl Record {
    /// Stamped with the current local time and the caller's location.
    #[must_use]
    #[track_caller]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            time: Some(Local::now().fixed_offset()),
            level,
            message: message.into(),
            source: Some(Source::caller()),
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: Option<DateTime<FixedOffset>>) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub const fn with_source(mut self, source: Option<Source>) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}
