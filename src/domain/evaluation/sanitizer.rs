use super::{CodePoint, StrictnessProfile, is_ultra_safe};
use crate::domain::Policy;

/// Rewrites `nfkc` into a suggestion compliant with `profile`.
///
/// Each rejected code point becomes a space, then whitespace runs collapse to
/// one space and the ends are trimmed. Idempotent for a fixed profile.
pub fn sanitize(nfkc: &str, profile: StrictnessProfile, policy: &Policy) -> String {
    let substituted: String = nfkc
        .chars()
        .map(|c| if keeps(c, profile, policy) { c } else { ' ' })
        .collect();

    collapse_whitespace(&substituted)
}

fn keeps(c: char, profile: StrictnessProfile, policy: &Policy) -> bool {
    match profile {
        StrictnessProfile::UltraSafe => is_ultra_safe(c),
        _ => profile.admits(CodePoint::Scalar(c), policy),
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
