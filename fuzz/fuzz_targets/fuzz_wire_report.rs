#![no_main]

use libfuzzer_sys::fuzz_target;
use textmatch::detection::DetectionReport;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes through the wire-payload decoder
    // Malformed bodies must come back as errors, never as panics
    if let Ok(s) = std::str::from_utf8(data) {
        let _result = DetectionReport::from_wire_json(s);
    }
});
