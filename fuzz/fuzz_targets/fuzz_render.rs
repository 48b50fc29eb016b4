#![no_main]
use hlog::{Attr, Level, LogHandler, Record};
use libfuzzer_sys::fuzz_target;
use std::time::Duration;

fuzz_target!(|input: (&str, &str, &str, i32, f64, u64)| {
    let (msg, key, text, level, float, nanos) = input;

    // Rendering is total: every value kind has a text form
    let handler = LogHandler::new()
        .with_prefix(key)
        .with_group(key)
        .with_attrs([Attr::string(key, text)]);
    let record = Record::new(Level::new(level), msg).with_attrs([
        Attr::float(key, float),
        Attr::duration("d", Duration::from_nanos(nanos)),
        Attr::group(key, [Attr::string(text, msg)]),
    ]);
    let _ = handler.format(&record);
    let _ = handler.enabled_for_record(&record);
});
