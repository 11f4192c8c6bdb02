//! Shared application state.

use std::sync::Arc;

use hikaya_core::completion::TextCompletion;
use hikaya_story::application::command_handlers::GenerationSettings;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The text-completion service stories are generated with.
    pub completion: Arc<dyn TextCompletion>,
    /// Settings applied to every completion call.
    pub settings: GenerationSettings,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(completion: Arc<dyn TextCompletion>, settings: GenerationSettings) -> Self {
        Self {
            completion,
            settings,
        }
    }
}
