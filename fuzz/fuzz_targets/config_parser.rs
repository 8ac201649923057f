#![no_main]

use benchplot::config::BenchmarkConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and validation must reject bad input without panicking
        for parsed in [
            BenchmarkConfig::from_toml_str(input),
            BenchmarkConfig::from_json_str(input),
        ] {
            if let Ok(config) = parsed {
                let _ = config.to_set();
                let _ = config.category_style();
            }
        }
    }
});
