//! Commands for the story context.

use uuid::Uuid;

use super::request::StoryRequest;

/// Command to generate a story from a submitted form.
#[derive(Debug, Clone)]
pub struct GenerateStory {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The submitted fields.
    pub request: StoryRequest,
    /// Language the client interface was in when submitting. Informational
    /// only; script detection decides the story language.
    pub language_hint: Option<String>,
}
