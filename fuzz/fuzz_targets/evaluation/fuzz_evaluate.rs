// Run with: cargo fuzz run fuzz_evaluate
// Focus: report invariants for arbitrary text under every profile
#![no_main]

use libfuzzer_sys::fuzz_target;
use namecheck::domain::{Policy, StrictnessProfile, evaluate, sanitize};

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data).to_string();
    let policy = Policy::default();

    for profile in StrictnessProfile::ALL {
        let report = evaluate(&input, profile);
        assert_eq!(report.original, input);
        assert_eq!(report.characters.len(), input.chars().count());
        assert!(!report.sanitized.contains("  "));
        assert_eq!(sanitize(&report.sanitized, profile, &policy), report.sanitized);
    }
});
