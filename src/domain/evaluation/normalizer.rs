use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForms {
    pub nfc: String,
    pub nfkc: String,
    pub visible_length: usize,
}

pub fn normalize(input: &str) -> NormalForms {
    NormalForms {
        nfc: input.nfc().collect(),
        nfkc: input.nfkc().collect(),
        visible_length: visible_length(input),
    }
}

/// Counts user-perceived characters (extended grapheme clusters).
///
/// Emoji sequences, flags and base + combining marks each count as one.
pub fn visible_length(input: &str) -> usize {
    input.graphemes(true).count()
}

/// Code point count. This overcounts composed emoji and flags and is only
/// meant as a cross-check against `visible_length`.
pub fn code_point_length(input: &str) -> usize {
    input.chars().count()
}
