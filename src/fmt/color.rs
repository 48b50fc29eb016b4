//! Bold ANSI colors used for level labels and attribute keys.

use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[1;31m",
            Self::Green => "\x1b[1;32m",
            Self::Yellow => "\x1b[1;33m",
            Self::Blue => "\x1b[1;34m",
        }
    }

    /// Levels below `INFO` are left uncolored.
    #[must_use]
    pub fn for_level(level: Level) -> Option<Self> {
        if level >= Level::ERROR {
            Some(Self::Red)
        } else if level >= Level::WARN {
            Some(Self::Yellow)
        } else if level >= Level::INFO {
            Some(Self::Green)
        } else {
            None
        }
    }
}

#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    format!("{}{text}{}", color.ansi(), Color::RESET)
}

/// Five columns wide: `error`, `warn `, `info `, `debug`, or a zero-padded number
/// for levels in between.
#[must_use]
pub fn level_label(level: Level, colors: bool) -> String {
    let label = level.name().map_or_else(
        || format!("{:<5}", format!("{:02}", level.value())),
        |name| format!("{name:<5}"),
    );

    match Color::for_level(level) {
        Some(color) if colors => colorize(&label, color),
        _ => label,
    }
}
