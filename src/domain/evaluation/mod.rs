//! Display-name evaluation.
//!
//! A pure pipeline: normalize, classify each code point, run the whole-string
//! rules, roll the severities up and derive a sanitized suggestion. It never
//! fails; every problem is reported as an [`Issue`].

mod aggregator;
mod classifier;
mod normalizer;
mod profile;
mod rules;
mod sanitizer;
mod types;

pub use aggregator::aggregate;
pub use classifier::{CharClass, CodePoint, classify, is_noncharacter};
pub use normalizer::{NormalForms, code_point_length, normalize, visible_length};
pub use profile::is_ultra_safe;
pub use rules::check_whole_string;
pub use sanitizer::sanitize;
pub use types::*;

use tracing::Span;
use unicode_normalization::UnicodeNormalization;

use crate::domain::Policy;

pub fn evaluate(raw: &str, profile: StrictnessProfile) -> EvaluationReport {
    evaluate_with_policy(raw, profile, &Policy::default())
}

#[tracing::instrument(
    skip_all,
    fields(profile = %profile, visible_length = tracing::field::Empty)
)]
pub fn evaluate_with_policy(
    raw: &str,
    profile: StrictnessProfile,
    policy: &Policy,
) -> EvaluationReport {
    let code_points: Vec<CodePoint> = raw.chars().map(CodePoint::Scalar).collect();
    build_report(raw.to_string(), &code_points, profile, policy)
}

/// Evaluates raw UTF-16 code units, so that isolated surrogates are reported
/// instead of being lost in decoding.
pub fn evaluate_utf16(units: &[u16], profile: StrictnessProfile) -> EvaluationReport {
    evaluate_utf16_with_policy(units, profile, &Policy::default())
}

#[tracing::instrument(
    skip_all,
    fields(profile = %profile, visible_length = tracing::field::Empty)
)]
pub fn evaluate_utf16_with_policy(
    units: &[u16],
    profile: StrictnessProfile,
    policy: &Policy,
) -> EvaluationReport {
    let code_points: Vec<CodePoint> = char::decode_utf16(units.iter().copied())
        .map(|decoded| match decoded {
            Ok(c) => CodePoint::Scalar(c),
            Err(e) => CodePoint::Surrogate(e.unpaired_surrogate()),
        })
        .collect();
    let original: String = code_points.iter().map(|cp| cp.display_char()).collect();
    build_report(original, &code_points, profile, policy)
}

fn build_report(
    original: String,
    code_points: &[CodePoint],
    profile: StrictnessProfile,
    policy: &Policy,
) -> EvaluationReport {
    let forms = normalize(&original);
    Span::current().record("visible_length", forms.visible_length);

    let issues = check_whole_string(&original, &forms, policy);

    let characters: Vec<CharacterFinding> = code_points
        .iter()
        .enumerate()
        .map(|(index, &code_point)| CharacterFinding {
            index,
            character: code_point.display_char(),
            code_point: code_point.value(),
            hex: hex_code_point(code_point.value()),
            issues: classify(index, code_point, profile, policy),
        })
        .collect();

    let worst = aggregate(&characters, &issues);

    // Surrogates never survive sanitizing; blank them before NFKC so the
    // decoder's U+FFFD does not leak into the suggestion.
    let sanitized = if code_points.iter().all(|cp| cp.as_char().is_some()) {
        sanitize(&forms.nfkc, profile, policy)
    } else {
        let blanked: String = code_points
            .iter()
            .map(|cp| cp.as_char().unwrap_or(' '))
            .collect();
        sanitize(&blanked.nfkc().collect::<String>(), profile, policy)
    };

    tracing::debug!(
        worst = %worst,
        string_issues = issues.len(),
        flagged_characters = characters.iter().filter(|c| !c.is_ok()).count(),
        "Evaluated display name"
    );

    EvaluationReport {
        original,
        nfc: forms.nfc,
        nfkc: forms.nfkc,
        visible_length: forms.visible_length,
        issues,
        characters,
        worst,
        sanitized,
    }
}
