//! The closed set of value kinds an attribute can carry.

use super::Attr;
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

/// Attribute payload. `Lazy` is the only kind that needs [`Value::resolve`] before use.
#[derive(Clone, Default)]
pub enum Value {
    /// The zero value. An attribute with an empty key and this value is dropped everywhere.
    #[default]
    Empty,
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    Time(DateTime<FixedOffset>),
    /// Ordered children, flattened into dotted keys instead of being rendered directly.
    Group(Vec<Attr>),
    Lazy(LazyValue),
}

impl Value {
    /// Follows lazy thunks down to a concrete value. Each thunk runs at most once.
    #[must_use]
    pub fn resolve(&self) -> &Self {
        match self {
            Self::Lazy(lazy) => lazy.get().resolve(),
            other => other,
        }
    }
}

/// Values of different kinds never compare equal; two lazy values are equal only
/// if they share the same thunk.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            #[allow(clippy::float_cmp)]
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Duration(a), Self::Duration(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Group(a), Self::Group(b)) => a == b,
            (Self::Lazy(a), Self::Lazy(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Self::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Self::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Self::Group(attrs) => f.debug_tuple("Group").field(attrs).finish(),
            Self::Lazy(lazy) => fmt::Debug::fmt(lazy, f),
        }
    }
}

/// Natural string form, unquoted. Lazy values are resolved first.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::fmt::format_value(self))
    }
}

/// A value computed on first use and cached. Clones share the cache.
#[derive(Clone)]
pub struct LazyValue(Arc<LazyInner>);

struct LazyInner {
    thunk: Box<dyn Fn() -> Value + Send + Sync>,
    cell: OnceLock<Value>,
}

impl LazyValue {
    pub fn new(thunk: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(LazyInner {
            thunk: Box::new(thunk),
            cell: OnceLock::new(),
        }))
    }

    /// Runs the thunk on the first call only.
    #[must_use]
    pub fn get(&self) -> &Value {
        self.0.cell.get_or_init(|| (self.0.thunk)())
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.0.cell.get().is_some()
    }
}

impl fmt::Debug for LazyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.cell.get() {
            Some(v) => f.debug_tuple("Lazy").field(v).finish(),
            None => f.write_str("Lazy(<unresolved>)"),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Self::Uint(u64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Duration> for Value {
    fn from(v: Duration) -> Self {
        Self::Duration(v)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(v: DateTime<FixedOffset>) -> Self {
        Self::Time(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

impl From<DateTime<Local>> for Value {
    fn from(v: DateTime<Local>) -> Self {
        Self::Time(v.fixed_offset())
    }
}

impl From<Vec<Attr>> for Value {
    fn from(v: Vec<Attr>) -> Self {
        Self::Group(v)
    }
}

impl From<LazyValue> for Value {
    fn from(v: LazyValue) -> Self {
        Self::Lazy(v)
    }
}
