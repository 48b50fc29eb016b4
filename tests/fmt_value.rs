//! Text forms of attribute values.

use chrono::DateTime;
use hlog::Value;
use hlog::fmt::{format_duration, format_float, format_time, format_value, quote, render_value};
use std::time::Duration;

#[test]
fn durations_use_human_units() {
    assert_eq!(format_duration(Duration::from_secs(5)), "5s");
    assert_eq!(format_duration(Duration::from_secs(3600)), "1h");
    assert_eq!(format_duration(Duration::from_secs(90 * 60)), "1h30m");
    assert_eq!(format_duration(Duration::from_secs(300)), "5m");
    assert_eq!(format_duration(Duration::from_secs(3605)), "1h0m5s");
    assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
}

#[test]
fn sub_second_durations() {
    assert_eq!(format_duration(Duration::ZERO), "0s");
    assert_eq!(format_duration(Duration::from_nanos(250)), "250ns");
    assert_eq!(format_duration(Duration::from_nanos(1_500)), "1.5µs");
    assert_eq!(format_duration(Duration::from_micros(2_250)), "2.25ms");
    assert_eq!(format_duration(Duration::from_millis(750)), "750ms");
}

#[test]
fn floats_switch_to_scientific_outside_range() {
    assert_eq!(format_float(0.0), "0");
    assert_eq!(format_float(0.000_001), "0.000001");
    assert_eq!(format_float(1.5), "1.5");
    assert_eq!(format_float(-2.25), "-2.25");
    assert_eq!(format_float(1e20), "100000000000000000000");
    assert_eq!(format_float(1e25), "1e+25");
    assert_eq!(format_float(1.5e-7), "1.5e-07");
    assert_eq!(format_float(-1e25), "-1e+25");
    assert_eq!(format_float(1.25e300), "1.25e+300");
}

#[test]
fn non_finite_floats() {
    assert_eq!(format_float(f64::INFINITY), "+Inf");
    assert_eq!(format_float(f64::NEG_INFINITY), "-Inf");
    assert_eq!(format_float(f64::NAN), "NaN");
}

#[test]
fn times_are_rfc3339() {
    let t = DateTime::parse_from_rfc3339("2024-01-15T10:30:45.123456789+02:00").unwrap();
    assert_eq!(format_time(&t), "2024-01-15T10:30:45.123456789+02:00");

    let utc = DateTime::parse_from_rfc3339("2024-01-15T10:30:45Z").unwrap();
    assert_eq!(format_time(&utc), "2024-01-15T10:30:45Z");
}

#[test]
fn quoting_only_when_a_space_is_present() {
    assert_eq!(quote("plain"), "plain");
    assert_eq!(quote("two words"), "\"two words\"");
    assert_eq!(quote("say \"hi\" now"), "\"say \\\"hi\\\" now\"");
}

#[test]
fn quoted_control_characters() {
    assert_eq!(quote("a\u{1} b"), "\"a\\x01 b\"");
    assert_eq!(quote("nul \0"), "\"nul \\x00\"");
    assert_eq!(quote("del \u{7f}"), "\"del \\x7f\"");
    assert_eq!(quote("tab\there x"), "\"tab\\there x\"");
    assert_eq!(quote("line one\nline two"), "\"line one\\nline two\"");
    assert_eq!(quote("next \u{85}"), "\"next \\u0085\"");
    assert_eq!(quote("caf\u{e9} au lait"), "\"caf\u{e9} au lait\"");
    assert_eq!(quote("back \\slash"), "\"back \\\\slash\"");
}

#[test]
fn render_value_quotes_text_kinds_only() {
    assert_eq!(render_value(&Value::from("a b")), "\"a b\"");
    assert_eq!(render_value(&Value::from(8080)), "8080");
    assert_eq!(render_value(&Value::from(true)), "true");
    assert_eq!(render_value(&Value::from(42u64)), "42");
    assert_eq!(
        render_value(&Value::from(Duration::from_secs(5400))),
        "1h30m"
    );
}

#[test]
fn natural_forms() {
    assert_eq!(format_value(&Value::Empty), "");
    assert_eq!(
        format_value(&Value::Group(vec![
            hlog::Attr::int("a", 1),
            hlog::Attr::string("b", "x"),
        ])),
        "[a=1 b=x]"
    );
    assert_eq!(Value::from(2.5).to_string(), "2.5");
}
