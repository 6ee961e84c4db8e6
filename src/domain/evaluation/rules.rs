use super::{Issue, NormalForms};
use crate::domain::Policy;

/// Whole-string checks. Every rule runs; order is length, whitespace,
/// normalization, then patterns.
pub fn check_whole_string(original: &str, forms: &NormalForms, policy: &Policy) -> Vec<Issue> {
    let mut issues = Vec::new();

    if forms.visible_length < policy.min_length {
        issues.push(Issue::error(
            "len-min",
            "Too short",
            "Lengthen the name to at least the minimum number of visible characters.",
        ));
    }
    if forms.visible_length > policy.max_length {
        issues.push(Issue::error(
            "len-max",
            "Too long",
            "Shorten the name to at most the maximum number of visible characters.",
        ));
    }

    if original.starts_with(char::is_whitespace) {
        issues.push(Issue::warn(
            "leading-space",
            "Leading whitespace",
            "Avoid starting the name with a space.",
        ));
    }
    if original.ends_with(char::is_whitespace) {
        issues.push(Issue::warn(
            "trailing-space",
            "Trailing whitespace",
            "Avoid ending the name with a space.",
        ));
    }
    if has_consecutive_whitespace(original) {
        issues.push(Issue::warn(
            "multi-space",
            "Consecutive whitespace",
            "Replace runs of spaces with a single space.",
        ));
    }

    if original != forms.nfc {
        issues.push(Issue::warn(
            "nfc",
            "Normalization would change the name",
            "Use the NFC form to avoid equality surprises.",
        ));
    }
    if original != forms.nfkc {
        issues.push(Issue::warn(
            "nfkc",
            "Compatibility normalization would simplify characters",
            "Some styled letters (double-struck, fullwidth...) will be flattened.",
        ));
    }

    if policy.is_degenerate(original) {
        issues.push(Issue::warn(
            "only-special",
            "Name made only of special characters",
            "Add letters or digits.",
        ));
    }
    if policy.reserved_prefix(original).is_some() {
        issues.push(Issue::error(
            "impersonation",
            "Impersonation risk",
            "Avoid official or staff terms at the start of the name.",
        ));
    }

    issues
}

fn has_consecutive_whitespace(s: &str) -> bool {
    let mut previous_was_space = false;
    for c in s.chars() {
        let is_space = c.is_whitespace();
        if is_space && previous_was_space {
            return true;
        }
        previous_was_space = is_space;
    }
    false
}
