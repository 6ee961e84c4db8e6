use claims::assert_ok;
use namecheck::configuration::{get_config_from, parse_config};
use namecheck::domain::{Policy, Severity, StrictnessProfile, evaluate_with_policy};

#[test]
fn shipped_config_matches_the_built_in_policy() {
    let settings = assert_ok!(get_config_from("config.yaml"));
    assert_eq!(settings.policy, Policy::default());
}

#[test]
fn configured_terms_drive_the_impersonation_rule() {
    let settings = assert_ok!(parse_config(
        "policy:\n  reserved_terms:\n    - support\n"
    ));
    let report = evaluate_with_policy("SupportDesk", StrictnessProfile::Balanced, &settings.policy);
    assert!(report.issue_ids().contains(&"impersonation"));
    assert_eq!(report.worst, Severity::Error);
}

#[test]
fn configured_emoji_extend_the_balanced_set() {
    let settings = assert_ok!(parse_config("policy:\n  safe_emoji:\n    - \"🐉\"\n"));
    let report = evaluate_with_policy("Nova🐉", StrictnessProfile::Balanced, &settings.policy);
    assert_eq!(report.worst, Severity::Ok);

    let report = evaluate_with_policy("Nova🔥", StrictnessProfile::Balanced, &settings.policy);
    assert_eq!(report.worst, Severity::Warn);
}
