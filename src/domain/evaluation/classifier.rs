use unicode_general_category::{GeneralCategory, get_general_category};

use super::{Issue, StrictnessProfile};
use crate::domain::Policy;

/// One position of the input sequence.
///
/// Rust strings cannot hold unpaired surrogates, so they only show up when
/// the input arrives as raw UTF-16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePoint {
    Scalar(char),
    Surrogate(u16),
}

impl CodePoint {
    pub fn value(self) -> u32 {
        match self {
            CodePoint::Scalar(c) => c as u32,
            CodePoint::Surrogate(unit) => u32::from(unit),
        }
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            CodePoint::Scalar(c) => Some(c),
            CodePoint::Surrogate(_) => None,
        }
    }

    pub fn display_char(self) -> char {
        self.as_char().unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

/// Unicode category memberships relevant to display-name safety.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClass {
    /// Cc or Cf.
    pub control_or_format: bool,
    /// Cs.
    pub surrogate: bool,
    /// Co.
    pub private_use: bool,
    /// Cn.
    pub unassigned: bool,
    pub noncharacter: bool,
    /// L, N or M.
    pub letter_number_mark: bool,
}

impl CharClass {
    pub fn of(code_point: CodePoint) -> Self {
        use GeneralCategory::*;

        let c = match code_point {
            CodePoint::Scalar(c) => c,
            CodePoint::Surrogate(_) => {
                return Self {
                    surrogate: true,
                    ..Self::default()
                };
            }
        };

        let category = get_general_category(c);
        Self {
            control_or_format: matches!(category, Control | Format),
            surrogate: matches!(category, Surrogate),
            private_use: matches!(category, PrivateUse),
            unassigned: matches!(category, Unassigned),
            noncharacter: is_noncharacter(c as u32),
            letter_number_mark: matches!(
                category,
                UppercaseLetter
                    | LowercaseLetter
                    | TitlecaseLetter
                    | ModifierLetter
                    | OtherLetter
                    | DecimalNumber
                    | LetterNumber
                    | OtherNumber
                    | NonspacingMark
                    | SpacingMark
                    | EnclosingMark
            ),
        }
    }

    /// Any of the categories no profile ever considers safe.
    pub fn is_hazard(&self) -> bool {
        self.control_or_format
            || self.surrogate
            || self.private_use
            || self.unassigned
            || self.noncharacter
    }
}

/// U+FDD0..=U+FDEF plus the last two code points of every plane.
pub fn is_noncharacter(code_point: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&code_point)
        || code_point & 0xFFFF == 0xFFFE
        || code_point & 0xFFFF == 0xFFFF
}

/// Per-character findings, in a fixed order: ctrl, sur, pua, unassigned,
/// nonchar, odd.
pub fn classify(
    index: usize,
    code_point: CodePoint,
    profile: StrictnessProfile,
    policy: &Policy,
) -> Vec<Issue> {
    let class = CharClass::of(code_point);
    let mut issues = Vec::new();

    if class.control_or_format {
        issues.push(Issue::error(
            format!("ctrl-{index}"),
            "Control/format character",
            "Avoid ZWJ, carriage returns and other invisible characters.",
        ));
    }
    if class.surrogate {
        issues.push(Issue::error(
            format!("sur-{index}"),
            "Isolated UTF-16 surrogate",
            "Invalid character on its own.",
        ));
    }
    if class.private_use {
        issues.push(Issue::warn(
            format!("pua-{index}"),
            "Private-use character",
            "May render as '?' depending on the platform.",
        ));
    }
    if class.unassigned {
        issues.push(Issue::error(
            format!("unassigned-{index}"),
            "Unassigned code point",
            "High risk of rendering as '?'.",
        ));
    }
    if class.noncharacter {
        issues.push(Issue::error(
            format!("nonchar-{index}"),
            "Reserved noncharacter",
            "Reserved by Unicode, do not use.",
        ));
    }

    // Fires alongside the hazards above; under permissive it duplicates them.
    if !profile.admits_class(code_point, &class, policy) {
        issues.push(Issue::warn(
            format!("odd-{index}"),
            "Symbol possibly unsupported (conservative mode)",
            "For maximum compatibility stick to letters, digits, _ . - and space.",
        ));
    }

    issues
}
