//! Level overrides keyed on attribute values.

use hlog::{Attr, Level, LogHandler, Record, Sink};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn lines(&self) -> usize {
        self.0.lock().unwrap().iter().filter(|&&b| b == b'\n').count()
    }
}

fn emits(handler: &LogHandler, record: &Record) -> bool {
    let capture = Capture::default();
    handler
        .with_writer(Sink::new(capture.clone()))
        .handle(record)
        .unwrap();
    capture.lines() == 1
}

fn debug_record(attrs: Vec<Attr>) -> Record {
    Record::new(Level::DEBUG, "probe").with_attrs(attrs)
}

#[test]
fn enabled_uses_min_level_without_overrides() {
    let h = LogHandler::new();
    assert!(!h.enabled(Level::DEBUG));
    assert!(h.enabled(Level::INFO));
    assert!(h.enabled(Level::ERROR));
}

#[test]
fn enabled_defers_when_overrides_exist() {
    let h = LogHandler::new().with_attr_level(Attr::string("pkg", "db"), Level::DEBUG);
    assert!(h.enabled(Level::DEBUG));
    assert!(h.enabled(Level::DEBUG - 10));
}

#[test]
fn matching_override_emits_below_minimum() {
    let h = LogHandler::new()
        .without_color()
        .with_attr_level(Attr::string("debug_id", "trace1"), Level::DEBUG);

    assert!(emits(&h, &debug_record(vec![Attr::string("debug_id", "trace1")])));
    assert!(!emits(&h, &debug_record(vec![Attr::string("debug_id", "trace2")])));
}

#[test]
fn override_threshold_is_inclusive() {
    let h = LogHandler::new().with_attr_level(Attr::string("pkg", "db"), Level::DEBUG);
    let at = Record::new(Level::DEBUG, "at").with_attrs([Attr::string("pkg", "db")]);
    let below = Record::new(Level::DEBUG - 1, "below").with_attrs([Attr::string("pkg", "db")]);

    assert!(h.enabled_for_record(&at));
    assert!(!h.enabled_for_record(&below));
}

#[test]
fn carried_attrs_participate_in_matching() {
    let h = LogHandler::new()
        .with_attr_level(Attr::string("pkg", "db"), Level::DEBUG)
        .with_attrs([Attr::string("pkg", "db")]);
    assert!(h.enabled_for_record(&debug_record(vec![])));
}

#[test]
fn entries_accumulate_per_key() {
    let h = LogHandler::new()
        .with_attr_level(Attr::string("pkg", "db"), Level::DEBUG)
        .with_attr_level(Attr::string("pkg", "net"), Level::WARN);

    assert_eq!(h.attr_levels("pkg").len(), 2);
    assert!(h.enabled_for_record(&debug_record(vec![Attr::string("pkg", "db")])));
    assert!(!h.enabled_for_record(&debug_record(vec![Attr::string("pkg", "net")])));
}

#[test]
fn any_applicable_entry_for_the_same_value_enables() {
    let h = LogHandler::new()
        .with_attr_level(Attr::string("pkg", "db"), Level::WARN)
        .with_attr_level(Attr::string("pkg", "db"), Level::DEBUG);
    assert!(h.enabled_for_record(&debug_record(vec![Attr::string("pkg", "db")])));
}

#[test]
fn values_of_different_kinds_do_not_match() {
    let h = LogHandler::new().with_attr_level(Attr::int("user", 42), Level::DEBUG);
    assert!(h.enabled_for_record(&debug_record(vec![Attr::int("user", 42)])));
    assert!(!h.enabled_for_record(&debug_record(vec![Attr::string("user", "42")])));
    assert!(!h.enabled_for_record(&debug_record(vec![Attr::uint("user", 42u64)])));
}

#[test]
fn override_for_absent_key_is_inert() {
    let h = LogHandler::new().with_attr_level(Attr::string("never", "seen"), Level::DEBUG);
    assert!(!h.enabled_for_record(&debug_record(vec![Attr::string("other", "seen")])));
    assert!(h.enabled_for_record(&Record::new(Level::INFO, "normal")));
}

#[test]
fn lazy_record_values_match_after_resolution() {
    let h = LogHandler::new().with_attr_level(Attr::string("tenant", "acme"), Level::DEBUG);
    let record = debug_record(vec![Attr::lazy("tenant", || hlog::Value::from("acme"))]);
    assert!(h.enabled_for_record(&record));
}

#[test]
fn deriving_does_not_touch_the_parent_table() {
    let parent = LogHandler::new().with_attr_level(Attr::string("pkg", "db"), Level::DEBUG);
    let child = parent.with_attr_level(Attr::string("pkg", "net"), Level::DEBUG);

    assert_eq!(parent.attr_levels("pkg").len(), 1);
    assert_eq!(child.attr_levels("pkg").len(), 2);
    assert!(!parent.enabled_for_record(&debug_record(vec![Attr::string("pkg", "net")])));
    assert!(child.enabled_for_record(&debug_record(vec![Attr::string("pkg", "net")])));
}

#[test]
fn suppressed_record_writes_zero_bytes() {
    let capture = Capture::default();
    let h = LogHandler::new()
        .with_attr_level(Attr::string("debug_id", "trace1"), Level::DEBUG)
        .with_writer(Sink::new(capture.clone()));
    h.handle(&debug_record(vec![Attr::string("debug_id", "nope")]))
        .unwrap();
    assert!(capture.0.lock().unwrap().is_empty());
}
