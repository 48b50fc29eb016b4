//! Severity levels. Named levels are spaced four apart so callers can slot
//! custom severities in between (`Level::INFO + 2`).

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Compared numerically: any `i32` is a valid level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Level(i32);

impl Level {
    pub const DEBUG: Self = Self(-4);
    pub const INFO: Self = Self(0);
    pub const WARN: Self = Self(4);
    pub const ERROR: Self = Self(8);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Name of a built-in level, `None` for anything in between.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            -4 => Some("debug"),
            0 => Some("info"),
            4 => Some("warn"),
            8 => Some("error"),
            _ => None,
        }
    }

    /// Nearest named level at or below `self`, and the offset from it.
    const fn base(self) -> (&'static str, i32) {
        if self.0 < Self::INFO.0 {
            ("debug", self.0 - Self::DEBUG.0)
        } else if self.0 < Self::WARN.0 {
            ("info", self.0 - Self::INFO.0)
        } else if self.0 < Self::ERROR.0 {
            ("warn", self.0 - Self::WARN.0)
        } else {
            ("error", self.0 - Self::ERROR.0)
        }
    }
}

impl Add<i32> for Level {
    type Output = Self;

    fn add(self, rhs: i32) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub<i32> for Level {
    type Output = Self;

    fn sub(self, rhs: i32) -> Self {
        Self(self.0.saturating_sub(rhs))
    }
}

impl From<i32> for Level {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// `info`, `warn+2`, `debug-1`.
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (name, offset) = self.base();
        match offset {
            0 => f.write_str(name),
            n if n > 0 => write!(f, "{name}+{n}"),
            n => write!(f, "{name}{n}"),
        }
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts a bare integer, a level name, or a name with a signed offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(n) = trimmed.parse::<i32>() {
            return Ok(Self(n));
        }

        let lower = trimmed.to_lowercase();
        let split = lower.find(['+', '-']).unwrap_or(lower.len());
        let (name, offset) = lower.split_at(split);

        let base = match name {
            "debug" => Self::DEBUG,
            "info" => Self::INFO,
            "warn" | "warning" => Self::WARN,
            "error" | "err" => Self::ERROR,
            _ => return Err(ParseLevelError(s.to_string())),
        };

        if offset.is_empty() {
            return Ok(base);
        }
        offset
            .parse::<i32>()
            .map(|n| base + n)
            .map_err(|_| ParseLevelError(s.to_string()))
    }
}
