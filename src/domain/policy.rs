use serde::{Deserialize, Serialize};

const VARIATION_SELECTOR_16: char = '\u{FE0F}';

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid policy: min_length ({min}) is greater than max_length ({max}).")]
    LengthBounds { min: usize, max: usize },
    #[error("Invalid policy: reserved terms cannot be empty or whitespace.")]
    EmptyReservedTerm,
}

/// Policy data consulted by the evaluator.
///
/// None of this is algorithmic; it can be swapped through `config.yaml`
/// without touching the evaluation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Minimum number of visible characters.
    pub min_length: usize,
    /// Maximum number of visible characters.
    pub max_length: usize,
    /// Names starting with one of these (case-insensitive) risk impersonation.
    pub reserved_terms: Vec<String>,
    /// A name made only of these characters is degenerate.
    pub degenerate_chars: String,
    pub extended_ascii: String,
    pub math_symbols: String,
    pub arrows_and_shapes: String,
    /// Emoji allowed under the balanced profile. A trailing U+FE0F is ignored
    /// when matching, so `"⭐️"` admits `'⭐'`.
    pub safe_emoji: Vec<String>,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: 3,
            max_length: 16,
            reserved_terms: ["epic", "fortnite", "admin", "mod", "staff"]
                .map(String::from)
                .to_vec(),
            degenerate_chars: "_.-".to_string(),
            extended_ascii: concat!(
                "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789",
                " _.!@#$%^&*()+={}|:;\"'<>,?/~`-"
            )
            .to_string(),
            math_symbols: "×÷±≈≠≤≥∞√∑∫∏".to_string(),
            arrows_and_shapes: "←→↑↓↔↕⇐⇒⇑⇓⇔⇕◀▶▲▼■□●○★☆♦♠♥♣".to_string(),
            safe_emoji: [
                "😀", "😃", "😄", "😁", "😆", "😊", "🙂", "🔥", "💯", "⭐️", "✨", "🎮", "🎯",
                "🏆", "👑", "💎", "⚡️", "🌟",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl Policy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_length > self.max_length {
            return Err(PolicyError::LengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        if self.reserved_terms.iter().any(|t| t.trim().is_empty()) {
            return Err(PolicyError::EmptyReservedTerm);
        }

        Ok(())
    }

    /// Membership in the curated extended-safe set used by the balanced profile.
    pub fn is_extended_safe(&self, c: char) -> bool {
        self.extended_ascii.contains(c)
            || self.math_symbols.contains(c)
            || self.arrows_and_shapes.contains(c)
            || self.is_safe_emoji(c)
    }

    pub fn is_safe_emoji(&self, c: char) -> bool {
        self.safe_emoji.iter().any(|emoji| {
            let mut base = emoji.chars().filter(|&e| e != VARIATION_SELECTOR_16);
            base.next() == Some(c) && base.next().is_none()
        })
    }

    /// Returns the reserved term `name` starts with, ignoring case.
    pub fn reserved_prefix(&self, name: &str) -> Option<&str> {
        let lowered = name.to_lowercase();
        self.reserved_terms
            .iter()
            .find(|term| lowered.starts_with(&term.to_lowercase()))
            .map(String::as_str)
    }

    pub fn is_degenerate(&self, name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| self.degenerate_chars.contains(c))
    }
}
