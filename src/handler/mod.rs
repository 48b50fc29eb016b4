//! Human friendly text handler.
//!
//! A [`LogHandler`] is an immutable configuration snapshot. Every `with_*` call
//! returns a new, independent snapshot derived from the receiver, so a handler
//! can be shared across threads and specialised freely without locking.
//!
//! Output is one line per record:
//!
//! ```text
//! info  | 10:30:45.123456 | api: started                             port=8080
//! ```

mod flatten;

pub use flatten::flatten;

use crate::attr::{Attr, Value};
use crate::fmt::{Color, colorize, format_clock, format_value, level_label, render_value};
use crate::level::Level;
use crate::record::Record;
use crate::sink::Sink;
use flatten::group_prefix;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;

/// The seam between a logging front-end and a record formatter.
pub trait Handler: Send + Sync {
    /// Cheap pre-check made before the record's attributes are built.
    fn enabled(&self, level: Level) -> bool;

    /// Full check against a materialised record.
    fn enabled_for_record(&self, record: &Record) -> bool {
        self.enabled(record.level)
    }

    /// Emits `record`, or nothing if it is filtered out.
    ///
    /// # Errors
    /// Write failures from the sink, unchanged.
    fn handle(&self, record: &Record) -> io::Result<()>;

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler>;

    fn with_group(&self, name: &str) -> Arc<dyn Handler>;
}

/// One entry of the override table: records carrying an attribute equal to
/// `value` are emitted when their level is at least `level`.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrLevel {
    pub value: Value,
    pub level: Level,
}

/// Not intended for high throughput; suited to logs a human watches, such as
/// a service under development.
#[derive(Debug, Clone)]
pub struct LogHandler {
    min_level: Level,
    colors: bool,
    source: bool,
    groups: Vec<String>,
    /// Already flattened against the group path active when they were added.
    attrs: Vec<Attr>,
    writer: Option<Sink>,
    prefix: Option<String>,
    /// Entry lists are shared with derived handlers and replaced, never mutated.
    attr_levels: HashMap<String, Arc<[AttrLevel]>>,
}

impl Default for LogHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl LogHandler {
    /// `INFO` and above, colored, to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::INFO,
            colors: true,
            source: false,
            groups: Vec::new(),
            attrs: Vec::new(),
            writer: None,
            prefix: None,
            attr_levels: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_level(&self, level: Level) -> Self {
        Self {
            min_level: level,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn without_color(&self) -> Self {
        Self {
            colors: false,
            ..self.clone()
        }
    }

    /// The attribute named `name` is written in front of the message
    /// (`"<value>: <message>"`) instead of alongside the other attributes.
    /// Replaces any previously designated prefix.
    #[must_use]
    pub fn with_prefix(&self, name: impl Into<String>) -> Self {
        Self {
            prefix: Some(name.into()),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_writer(&self, sink: Sink) -> Self {
        Self {
            writer: Some(sink),
            ..self.clone()
        }
    }

    /// Adds the caller's `file:line` to each line, for records that carry one.
    #[must_use]
    pub fn with_source(&self) -> Self {
        Self {
            source: true,
            ..self.clone()
        }
    }

    /// Lets records carrying `attr` through once their level reaches `level`,
    /// even below the handler's minimum. Entries accumulate per key: for
    /// example a `package` attribute can get a different level per package.
    #[must_use]
    pub fn with_attr_level(&self, attr: Attr, level: Level) -> Self {
        let entry = AttrLevel {
            value: attr.value.resolve().clone(),
            level,
        };
        let mut attr_levels = self.attr_levels.clone();
        let entries: Arc<[AttrLevel]> = attr_levels
            .get(&attr.key)
            .map_or_else(Vec::new, |existing| existing.to_vec())
            .into_iter()
            .chain(std::iter::once(entry))
            .collect();
        attr_levels.insert(attr.key, entries);

        Self {
            attr_levels,
            ..self.clone()
        }
    }

    /// Carried attributes are flattened against the current group path right
    /// away; empty attributes are dropped.
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        let prefix = group_prefix(&self.groups);
        let mut next = self.clone();
        for attr in attrs {
            next.attrs.extend(flatten(&prefix, &attr));
        }
        next
    }

    /// Qualifies the keys of all attributes added afterwards with `name.`.
    /// An empty name changes nothing.
    #[must_use]
    pub fn with_group(&self, name: &str) -> Self {
        let mut next = self.clone();
        if !name.is_empty() {
            next.groups.push(name.to_string());
        }
        next
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub const fn colors(&self) -> bool {
        self.colors
    }

    #[must_use]
    pub const fn source(&self) -> bool {
        self.source
    }

    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    #[must_use]
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Override entries registered for `key`, in registration order.
    #[must_use]
    pub fn attr_levels(&self, key: &str) -> &[AttrLevel] {
        match self.attr_levels.get(key) {
            Some(entries) => &entries[..],
            None => &[],
        }
    }

    /// With overrides registered every level may be enabled; the decision is
    /// deferred to [`LogHandler::enabled_for_record`].
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        !self.attr_levels.is_empty() || level >= self.min_level
    }

    /// Carried attributes are scanned before the record's own; the first
    /// matching override decides.
    #[must_use]
    pub fn enabled_for_record(&self, record: &Record) -> bool {
        if record.level >= self.min_level {
            return true;
        }
        self.attrs
            .iter()
            .chain(&record.attrs)
            .any(|attr| self.attr_has_min_level(attr, record.level))
    }

    fn attr_has_min_level(&self, attr: &Attr, level: Level) -> bool {
        let Some(entries) = self.attr_levels.get(&attr.key) else {
            return false;
        };
        let value = attr.value.resolve();
        entries
            .iter()
            .any(|entry| entry.value == *value && level >= entry.level)
    }

    /// Writes one line for `record` to the configured sink (stdout if none).
    /// Filtered records produce no output and no error.
    ///
    /// # Errors
    /// Write failures from the sink, unchanged.
    pub fn handle(&self, record: &Record) -> io::Result<()> {
        if !self.enabled_for_record(record) {
            return Ok(());
        }

        let line = self.format(record);
        match &self.writer {
            Some(sink) => sink.write_line(line.as_bytes()),
            None => Sink::stdout().write_line(line.as_bytes()),
        }
    }

    /// Renders `record` as a full line, newline included, without filtering.
    #[must_use]
    pub fn format(&self, record: &Record) -> String {
        let kind = level_label(record.level, self.colors);

        let mut prefix = String::new();
        let mut flat = String::new();

        for attr in &self.attrs {
            self.push_attr(&mut flat, &mut prefix, attr);
        }
        let group_prefix = group_prefix(&self.groups);
        for attr in &record.attrs {
            for leaf in flatten(&group_prefix, attr) {
                self.push_attr(&mut flat, &mut prefix, &leaf);
            }
        }

        let message = if prefix.is_empty() {
            record.message.clone()
        } else {
            format!("{prefix}: {}", record.message)
        };

        let clock = format_clock(record.time.as_ref());

        match record.source.filter(|_| self.source) {
            Some(source) => {
                let source = source.to_string();
                format!("{kind} | {clock:>15} | {source:<20} | {message:<40} {flat}\n")
            }
            None => format!("{kind} | {clock:>15} | {message:<40} {flat}\n"),
        }
    }

    /// Either captures `attr` as the message prefix or appends ` key=value`.
    fn push_attr(&self, flat: &mut String, prefix: &mut String, attr: &Attr) {
        if attr.is_empty() {
            return;
        }
        if self.prefix.as_deref() == Some(attr.key.as_str()) {
            *prefix = format_value(&attr.value);
            return;
        }

        flat.push(' ');
        if self.colors {
            flat.push_str(&colorize(&attr.key, Color::Blue));
        } else {
            flat.push_str(&attr.key);
        }
        flat.push('=');
        flat.push_str(&render_value(&attr.value));
    }
}

impl Handler for LogHandler {
    fn enabled(&self, level: Level) -> bool {
        Self::enabled(self, level)
    }

    fn enabled_for_record(&self, record: &Record) -> bool {
        Self::enabled_for_record(self, record)
    }

    fn handle(&self, record: &Record) -> io::Result<()> {
        Self::handle(self, record)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Arc<dyn Handler> {
        Arc::new(Self::with_attrs(self, attrs))
    }

    fn with_group(&self, name: &str) -> Arc<dyn Handler> {
        Arc::new(Self::with_group(self, name))
    }
}
