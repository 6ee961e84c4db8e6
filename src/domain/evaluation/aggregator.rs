use super::{CharacterFinding, Issue, Severity};

/// Worst severity across per-character and whole-string issues.
pub fn aggregate(characters: &[CharacterFinding], issues: &[Issue]) -> Severity {
    characters
        .iter()
        .flat_map(|c| c.issues.iter())
        .chain(issues)
        .map(|i| i.severity)
        .max()
        .unwrap_or(Severity::Ok)
}
