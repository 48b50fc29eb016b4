//! Text forms for attribute values. Every kind has one; nothing here can fail.

use crate::attr::Value;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::borrow::Cow;
use std::fmt::Write;
use std::time::Duration;

/// Fixed-point for zero and magnitudes in `[1e-6, 1e21)`, scientific otherwise
/// (`1e+25`, `1.5e-07`). Both use the shortest digits that round-trip.
/// Infinities render as `+Inf` and `-Inf`.
#[must_use]
pub fn format_float(v: f64) -> String {
    let abs = v.abs();
    if abs == 0.0 || (1e-6..1e21).contains(&abs) {
        format!("{v}")
    } else if v.is_infinite() {
        let sign = if v.is_sign_negative() { '-' } else { '+' };
        format!("{sign}Inf")
    } else {
        scientific(v)
    }
}

/// Signed exponent of at least two digits.
fn scientific(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = exp.strip_prefix('-').map_or(('+', exp), |d| ('-', d));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // NaN
        None => s,
    }
}

/// `750ms`, `5s`, `1h30m`, `1h`. Whole minutes and whole hours drop their
/// trailing zero components.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    let mut s = if nanos == 0 {
        "0s".to_string()
    } else if nanos < 1_000 {
        format!("{nanos}ns")
    } else if nanos < 1_000_000 {
        sub_second(nanos, 3, "µs")
    } else if nanos < 1_000_000_000 {
        sub_second(nanos, 6, "ms")
    } else {
        let secs = d.as_secs();
        let frac = fraction(u128::from(d.subsec_nanos()), 9);
        let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
        if h > 0 {
            format!("{h}h{m}m{s}{frac}s")
        } else if m > 0 {
            format!("{m}m{s}{frac}s")
        } else {
            format!("{s}{frac}s")
        }
    };

    if let Some(head) = s.strip_suffix("m0s") {
        s = format!("{head}m");
    }
    if let Some(head) = s.strip_suffix("h0m") {
        s = format!("{head}h");
    }
    s
}

fn sub_second(nanos: u128, digits: u32, unit: &str) -> String {
    let scale = 10u128.pow(digits);
    format!(
        "{}{}{unit}",
        nanos / scale,
        fraction(nanos % scale, digits as usize)
    )
}

/// `.5` for 500 of 1000; empty when the fraction is zero.
fn fraction(frac: u128, width: usize) -> String {
    if frac == 0 {
        return String::new();
    }
    let digits = format!("{frac:0width$}");
    format!(".{}", digits.trim_end_matches('0'))
}

/// RFC3339 with as many fraction digits as needed, up to nanoseconds.
#[must_use]
pub fn format_time(t: &DateTime<FixedOffset>) -> String {
    t.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `HH:MM:SS.micros` for the line header; the zero timestamp renders empty.
#[must_use]
pub fn format_clock(t: Option<&DateTime<FixedOffset>>) -> String {
    t.map(|t| t.format("%H:%M:%S%.6f").to_string())
        .unwrap_or_default()
}

/// Double-quotes any text containing a space. Inside the quotes `"` and `\`
/// are backslash-escaped, common control characters get short escapes (`\n`),
/// other ASCII controls become `\x01` and the rest of the controls `\u0085`.
#[must_use]
pub fn quote(s: &str) -> Cow<'_, str> {
    if !s.contains(' ') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    Cow::Owned(out)
}

/// Natural, unquoted text of a value after resolving it.
#[must_use]
pub fn format_value(value: &Value) -> String {
    match value.resolve() {
        Value::Empty | Value::Lazy(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Int(n) => n.to_string(),
        Value::Uint(n) => n.to_string(),
        Value::Float(n) => format_float(*n),
        Value::Bool(b) => b.to_string(),
        Value::Duration(d) => format_duration(*d),
        Value::Time(t) => format_time(t),
        Value::Group(attrs) => {
            let inner: Vec<String> = attrs
                .iter()
                .map(|a| format!("{}={}", a.key, format_value(&a.value)))
                .collect();
            format!("[{}]", inner.join(" "))
        }
    }
}

/// The `value` half of an inline `key=value` pair.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value.resolve() {
        v @ (Value::Float(_) | Value::Duration(_) | Value::Time(_)) => format_value(v),
        v => quote(&format_value(v)).into_owned(),
    }
}
