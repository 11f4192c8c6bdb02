//! Outcome of a story generation call.

use serde::{Deserialize, Serialize};

/// Message returned to the caller for every upstream failure.
pub const FAILURE_MESSAGE: &str = "Failed to generate story. Please try again.";

/// Either the generated story or a generic failure, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoryResult {
    /// The raw text returned by the completion service.
    Story {
        /// Generated story text.
        story: String,
        /// Language the story was requested in.
        #[serde(rename = "isArabic")]
        is_arabic: bool,
    },
    /// The completion call failed.
    Failed {
        /// Fixed, provider-independent message.
        error: String,
    },
}

impl StoryResult {
    /// The generic failure result.
    #[must_use]
    pub fn failed() -> Self {
        Self::Failed {
            error: FAILURE_MESSAGE.to_owned(),
        }
    }

    /// Returns true for the failure variant.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
