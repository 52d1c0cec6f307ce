//! Fuzzing harness for feed config parsing
//!
//! Run with: cargo fuzz run config_parser

#![no_main]
use libfuzzer_sys::fuzz_target;
use podfeed_config::FeedConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<FeedConfig>(s) {
            let _ = config.validate();
            let _ = config.to_toml_string();
        }
    }
});
