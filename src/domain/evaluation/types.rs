use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Ok,
    Warn,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub id: String,
    pub label: &'static str,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl Issue {
    pub fn new(
        id: impl Into<String>,
        label: &'static str,
        severity: Severity,
        hint: &'static str,
    ) -> Self {
        Self {
            id: id.into(),
            label,
            severity,
            hint: Some(hint),
        }
    }

    pub fn warn(id: impl Into<String>, label: &'static str, hint: &'static str) -> Self {
        Self::new(id, label, Severity::Warn, hint)
    }

    pub fn error(id: impl Into<String>, label: &'static str, hint: &'static str) -> Self {
        Self::new(id, label, Severity::Error, hint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterFinding {
    /// 0-based code point position in the input.
    pub index: usize,
    /// The character itself. Isolated surrogates are shown as U+FFFD.
    #[serde(rename = "char")]
    pub character: char,
    pub code_point: u32,
    /// `U+XXXX`, uppercase and zero-padded to at least four digits.
    pub hex: String,
    pub issues: Vec<Issue>,
}

impl CharacterFinding {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn hex_code_point(code_point: u32) -> String {
    format!("U+{code_point:04X}")
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown strictness profile '{0}': expected ultra-safe, balanced or permissive.")]
pub struct UnknownProfile(pub String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrictnessProfile {
    /// ASCII letters, digits and underscore only.
    UltraSafe,
    #[default]
    Balanced,
    /// Everything except the Unicode hazard categories.
    Permissive,
}

impl StrictnessProfile {
    pub const ALL: [StrictnessProfile; 3] = [
        StrictnessProfile::UltraSafe,
        StrictnessProfile::Balanced,
        StrictnessProfile::Permissive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrictnessProfile::UltraSafe => "ultra-safe",
            StrictnessProfile::Balanced => "balanced",
            StrictnessProfile::Permissive => "permissive",
        }
    }
}

impl Display for StrictnessProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrictnessProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrictnessProfile::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    pub original: String,
    pub nfc: String,
    pub nfkc: String,
    pub visible_length: usize,
    pub issues: Vec<Issue>,
    pub characters: Vec<CharacterFinding>,
    pub worst: Severity,
    pub sanitized: String,
}

impl EvaluationReport {
    pub fn is_nfc(&self) -> bool {
        self.original == self.nfc
    }

    pub fn is_nfkc(&self) -> bool {
        self.original == self.nfkc
    }

    /// Whole-string issue ids followed by per-character issue ids, in report order.
    pub fn issue_ids(&self) -> Vec<&str> {
        self.issues
            .iter()
            .chain(self.characters.iter().flat_map(|c| c.issues.iter()))
            .map(|i| i.id.as_str())
            .collect()
    }
}
