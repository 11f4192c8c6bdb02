//! Command handlers for the story context.
//!
//! `generate_story` orchestrates a single request: validate, decide the
//! language, render the prompt, call the completion service once.

use hikaya_core::completion::{CompletionRequest, TextCompletion};
use hikaya_core::error::DomainError;
use tracing::{debug, error, info};

use crate::domain::commands::GenerateStory;
use crate::domain::language::decide_language;
use crate::domain::locale::UiLanguage;
use crate::domain::result::StoryResult;
use crate::domain::templates::PromptTemplate;

/// Sampling temperature for every story.
pub const STORY_TEMPERATURE: f32 = 0.7;

/// Default upper bound on generated tokens.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Tunables applied to every completion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

/// Handles the `GenerateStory` command.
///
/// Upstream failures are logged and collapsed into
/// [`StoryResult::Failed`]; they never surface as `Err`.
///
/// # Errors
///
/// Returns `DomainError::Validation` if a field is missing or blank. The
/// completion service is not called in that case.
pub async fn generate_story(
    command: &GenerateStory,
    completion: &dyn TextCompletion,
    settings: GenerationSettings,
) -> Result<StoryResult, DomainError> {
    command.request.validate()?;

    let decision = decide_language(&command.request);

    if let Some(hint) = command.language_hint.as_deref() {
        let detected = UiLanguage::from_is_arabic(decision.is_arabic);
        if UiLanguage::from_hint(hint).is_some_and(|hinted| hinted != detected) {
            debug!(
                correlation_id = %command.correlation_id,
                hint,
                ?detected,
                "language hint disagrees with script detection, using detection"
            );
        }
    }

    let prompt = PromptTemplate::for_decision(decision).build(&command.request);

    debug!(
        correlation_id = %command.correlation_id,
        is_arabic = decision.is_arabic,
        system_len = prompt.system_instruction.len(),
        user_len = prompt.user_prompt.len(),
        "prompt built"
    );

    let request = CompletionRequest {
        system_instruction: prompt.system_instruction,
        user_prompt: prompt.user_prompt,
        temperature: STORY_TEMPERATURE,
        max_tokens: settings.max_tokens,
    };

    match completion.complete(&request).await {
        Ok(story) => {
            info!(
                correlation_id = %command.correlation_id,
                is_arabic = decision.is_arabic,
                story_len = story.len(),
                "story generated"
            );
            Ok(StoryResult::Story {
                story,
                is_arabic: decision.is_arabic,
            })
        }
        Err(err) => {
            error!(
                correlation_id = %command.correlation_id,
                error = %err,
                "story generation failed"
            );
            Ok(StoryResult::failed())
        }
    }
}
