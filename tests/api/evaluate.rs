use crate::helpers::{evaluate, has_issue_prefix, max_severity, odd_count};
use fake::Fake;
use fake::faker::internet::en::Username;
use fake::faker::name::en::FirstName;
use namecheck::domain::{
    CodePoint, Policy, Severity, StrictnessProfile, evaluate_with_policy, sanitize,
};
use proptest::prelude::*;

#[test]
fn two_letters_are_too_short() {
    let report = evaluate("ab", StrictnessProfile::Balanced);
    assert!(report.issue_ids().contains(&"len-min"));
    assert_eq!(report.worst, Severity::Error);
}

#[test]
fn empty_string_is_too_short_and_has_no_characters() {
    let report = evaluate("", StrictnessProfile::Permissive);
    assert_eq!(report.issue_ids(), ["len-min"]);
    assert!(report.characters.is_empty());
    assert_eq!(report.sanitized, "");
}

#[test]
fn plain_name_is_ok_for_every_profile() {
    for profile in StrictnessProfile::ALL {
        let report = evaluate("FaZeNova", profile);
        assert_eq!(report.worst, Severity::Ok, "{profile}");
        assert!(report.characters.iter().all(|c| c.is_ok()));
        assert_eq!(report.visible_length, 8);
        assert!(report.is_nfc() && report.is_nfkc());
    }
}

#[test]
fn trailing_space_is_warned_and_trimmed() {
    let report = evaluate("Nova ", StrictnessProfile::Balanced);
    assert!(report.issue_ids().contains(&"trailing-space"));
    assert_eq!(report.sanitized, "Nova");
}

#[test]
fn accented_name_depends_on_profile() {
    let permissive = evaluate("épic_god", StrictnessProfile::Permissive);
    assert!(
        permissive
            .characters
            .iter()
            .flat_map(|c| c.issues.iter())
            .all(|i| i.severity != Severity::Error)
    );
    assert_eq!(permissive.sanitized, "épic_god");

    let ultra = evaluate("épic_god", StrictnessProfile::UltraSafe);
    assert_eq!(ultra.characters[0].issues.len(), 1);
    assert_eq!(ultra.characters[0].issues[0].id, "odd-0");
    assert_eq!(ultra.characters[0].issues[0].severity, Severity::Warn);
    assert_eq!(ultra.sanitized, "pic_god");
}

#[test]
fn decomposed_accent_sanitizes_from_the_composed_form() {
    // NFKC composes e + U+0301 into é before the ultra-safe filter runs.
    let report = evaluate("e\u{301}pic_god", StrictnessProfile::UltraSafe);
    assert_eq!(report.nfkc, "épic_god");
    assert_eq!(report.sanitized, "pic_god");
    assert!(report.issue_ids().contains(&"nfc"));
}

#[test]
fn reserved_terms_are_impersonation_errors_in_every_profile() {
    for profile in StrictnessProfile::ALL {
        let report = evaluate("admin123", profile);
        assert!(report.issue_ids().contains(&"impersonation"));
        assert_eq!(report.worst, Severity::Error);
    }
}

#[test]
fn unassigned_code_point_is_an_error() {
    let report = evaluate("No\u{378}va", StrictnessProfile::Balanced);
    assert!(has_issue_prefix(&report.characters[2], "unassigned-"));
    assert_eq!(report.characters[2].hex, "U+0378");
    assert_eq!(report.worst, Severity::Error);
}

#[test]
fn noncharacter_is_an_error() {
    let report = evaluate("Nova\u{FDD0}", StrictnessProfile::Permissive);
    assert!(has_issue_prefix(&report.characters[4], "nonchar-"));
    assert_eq!(report.worst, Severity::Error);
    assert_eq!(report.sanitized, "Nova");
}

#[test]
fn zero_width_joiner_sequence_is_one_visible_character_but_flagged() {
    let report = evaluate("ab👨\u{200D}👩", StrictnessProfile::Permissive);
    assert_eq!(report.visible_length, 3);
    assert!(has_issue_prefix(&report.characters[3], "ctrl-"));
    assert_eq!(report.characters[3].hex, "U+200D");
}

#[test]
fn custom_policy_changes_bounds_and_terms() {
    let policy = Policy {
        min_length: 2,
        reserved_terms: vec!["support".into()],
        ..Policy::default()
    };
    let report = evaluate_with_policy("ab", StrictnessProfile::Balanced, &policy);
    assert_eq!(report.worst, Severity::Ok);

    let report = evaluate_with_policy("Support_Bot", StrictnessProfile::Balanced, &policy);
    assert!(report.issue_ids().contains(&"impersonation"));

    let report = evaluate_with_policy("admin123", StrictnessProfile::Balanced, &policy);
    assert!(!report.issue_ids().contains(&"impersonation"));
}

#[test]
fn curated_sets_with_hazards_keep_profiles_ordered() {
    let policy = Policy {
        math_symbols: "\u{200B}".into(),
        extended_ascii: "abc".into(),
        ..Policy::default()
    };
    let name = "ab_\u{200B}cd";
    let odd = |profile| odd_count(&evaluate_with_policy(name, profile, &policy));
    assert_eq!(odd(StrictnessProfile::UltraSafe), 1);
    assert_eq!(odd(StrictnessProfile::Balanced), 1);
    assert_eq!(odd(StrictnessProfile::Permissive), 1);

    let report = evaluate_with_policy(name, StrictnessProfile::Balanced, &policy);
    assert_eq!(report.sanitized, "ab_ cd");
}

#[test]
fn generated_ascii_names_keep_report_invariants() {
    for _ in 0..50 {
        let first: String = FirstName().fake();
        let handle: String = Username().fake();
        for name in [first, handle] {
            for profile in StrictnessProfile::ALL {
                let report = evaluate(&name, profile);
                assert_eq!(report.original, name);
                assert_eq!(report.characters.len(), name.chars().count());
                assert_eq!(report.worst, max_severity(&report));
            }
        }
    }
}

#[test]
fn report_serializes_with_stable_field_names() {
    let report = evaluate("a\u{200B}", StrictnessProfile::Balanced);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["worst"], "error");
    assert_eq!(json["characters"][1]["char"], "\u{200B}");
    assert_eq!(json["characters"][1]["hex"], "U+200B");
    assert_eq!(json["characters"][1]["issues"][0]["id"], "ctrl-1");
    assert_eq!(json["issues"][0]["id"], "len-min");
}

proptest! {
    #[test]
    fn evaluation_never_alters_the_input(name in any::<String>()) {
        for profile in StrictnessProfile::ALL {
            prop_assert_eq!(evaluate(&name, profile).original, name.clone());
        }
    }

    #[test]
    fn worst_is_the_maximum_issue_severity(name in any::<String>()) {
        for profile in StrictnessProfile::ALL {
            let report = evaluate(&name, profile);
            prop_assert_eq!(report.worst, max_severity(&report));
        }
    }

    #[test]
    fn stricter_profiles_flag_at_least_as_many_characters(name in any::<String>()) {
        let ultra = odd_count(&evaluate(&name, StrictnessProfile::UltraSafe));
        let balanced = odd_count(&evaluate(&name, StrictnessProfile::Balanced));
        let permissive = odd_count(&evaluate(&name, StrictnessProfile::Permissive));
        prop_assert!(ultra >= balanced);
        prop_assert!(balanced >= permissive);
    }

    #[test]
    fn suggestion_is_clean_and_stable(name in any::<String>()) {
        let policy = Policy::default();
        for profile in StrictnessProfile::ALL {
            let suggestion = evaluate(&name, profile).sanitized;
            prop_assert!(!suggestion.starts_with(' ') && !suggestion.ends_with(' '));
            prop_assert!(!suggestion.contains("  "));
            prop_assert!(
                suggestion
                    .chars()
                    .filter(|&c| c != ' ')
                    .all(|c| profile.admits(CodePoint::Scalar(c), &policy))
            );
            prop_assert_eq!(sanitize(&suggestion, profile, &policy), suggestion.clone());
        }
    }
}
