//! Bilingual input detection.

use std::ops::RangeInclusive;

use super::request::StoryRequest;

/// The Arabic Unicode block.
const ARABIC_BLOCK: RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Language classification of a whole request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDecision {
    /// True when the story is to be written in Arabic.
    pub is_arabic: bool,
}

/// Returns true iff `text` contains a code point in U+0600–U+06FF.
#[must_use]
pub fn detect_arabic(text: &str) -> bool {
    text.chars().any(|c| ARABIC_BLOCK.contains(&c))
}

/// Classifies a request as Arabic when any of its fields contains Arabic
/// script, otherwise English.
#[must_use]
pub fn decide_language(request: &StoryRequest) -> LanguageDecision {
    LanguageDecision {
        is_arabic: request.fields().into_iter().any(detect_arabic),
    }
}
