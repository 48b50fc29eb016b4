//! Key/value attributes attached to records and carried by handlers.

mod value;

pub use value::{LazyValue, Value};

use chrono::{DateTime, FixedOffset};
use std::time::Duration;

/// Keys are not required to be unique within a record; duplicates pass through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, Value::String(value.into()))
    }

    pub fn int(key: impl Into<String>, value: impl Into<i64>) -> Self {
        Self::new(key, Value::Int(value.into()))
    }

    pub fn uint(key: impl Into<String>, value: impl Into<u64>) -> Self {
        Self::new(key, Value::Uint(value.into()))
    }

    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, Value::Float(value))
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, Value::Bool(value))
    }

    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::new(key, Value::Duration(value))
    }

    pub fn time(key: impl Into<String>, value: impl Into<DateTime<FixedOffset>>) -> Self {
        Self::new(key, Value::Time(value.into()))
    }

    /// A named group. An empty key splices the children into the enclosing level.
    pub fn group(key: impl Into<String>, attrs: impl IntoIterator<Item = Self>) -> Self {
        Self::new(key, Value::Group(attrs.into_iter().collect()))
    }

    /// Defers computing the value until the record is actually rendered or matched.
    pub fn lazy(key: impl Into<String>, thunk: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::new(key, Value::Lazy(LazyValue::new(thunk)))
    }

    /// The zero attribute: no key and no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && matches!(self.value.resolve(), Value::Empty)
    }
}
