use super::{CharClass, CodePoint, StrictnessProfile};
use crate::domain::Policy;

/// The ultra-safe alphabet: ASCII letters, digits and underscore.
pub fn is_ultra_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl StrictnessProfile {
    /// Whether `code_point` belongs to this profile's safe set.
    pub fn admits(self, code_point: CodePoint, policy: &Policy) -> bool {
        self.admits_class(code_point, &CharClass::of(code_point), policy)
    }

    pub(crate) fn admits_class(
        self,
        code_point: CodePoint,
        class: &CharClass,
        policy: &Policy,
    ) -> bool {
        let Some(c) = code_point.as_char() else {
            return false;
        };

        match self {
            StrictnessProfile::UltraSafe => is_ultra_safe(c),
            // Nested between ultra-safe and permissive whatever the curated sets hold.
            StrictnessProfile::Balanced => {
                is_ultra_safe(c)
                    || (!class.is_hazard()
                        && (class.letter_number_mark || policy.is_extended_safe(c)))
            }
            StrictnessProfile::Permissive => !class.is_hazard(),
        }
    }
}
