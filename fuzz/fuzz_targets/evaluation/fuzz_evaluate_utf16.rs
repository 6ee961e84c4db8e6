// Run with: cargo fuzz run fuzz_evaluate_utf16
// Focus: unpaired surrogates, which only exist in raw UTF-16 input
#![no_main]

use libfuzzer_sys::fuzz_target;
use namecheck::domain::{Severity, StrictnessProfile, evaluate_utf16};

fuzz_target!(|units: Vec<u16>| {
    let has_lone_surrogate = char::decode_utf16(units.iter().copied()).any(|c| c.is_err());

    for profile in StrictnessProfile::ALL {
        let report = evaluate_utf16(&units, profile);
        assert_eq!(report.characters.len(), char::decode_utf16(units.iter().copied()).count());
        if has_lone_surrogate {
            assert_eq!(report.worst, Severity::Error);
        }
    }
});
