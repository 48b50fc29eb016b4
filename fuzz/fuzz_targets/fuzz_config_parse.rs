#![no_main]
use hlog::Config;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Must not panic on any config text; file outputs are not opened
    if let Ok(mut config) = data.parse::<Config>() {
        config.output = "stdout".to_string();
        let _ = config.build();
    }
});
