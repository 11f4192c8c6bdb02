//! Client view state: form, pending request, story, or failure alert.

use hikaya_core::error::DomainError;

use super::locale::UiLanguage;
use super::request::StoryRequest;
use super::result::StoryResult;

/// Which panel the page is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewPhase {
    /// Form shown, nothing in flight.
    Idle,
    /// Form shown with the submit button disabled.
    Submitting,
    /// Story shown in place of the form.
    StoryShown {
        /// Generated story text.
        story: String,
        /// Language the story was written in.
        is_arabic: bool,
    },
    /// Form shown with a localized failure alert.
    ErrorShown {
        /// Client-localized failure text.
        message: String,
    },
}

/// The story page state machine.
///
/// Form values survive every transition so a failed submission can be
/// retried without retyping.
#[derive(Debug, Clone)]
pub struct StoryView {
    /// Current form values.
    pub form: StoryRequest,
    /// Interface language chosen with the toggle.
    pub ui_language: UiLanguage,
    phase: ViewPhase,
}

impl StoryView {
    /// Creates an idle view with an empty form.
    #[must_use]
    pub fn new(ui_language: UiLanguage) -> Self {
        Self {
            form: StoryRequest::default(),
            ui_language,
            phase: ViewPhase::Idle,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    /// Moves to `Submitting` and returns the request to send.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if a request is already in flight
    /// or a story is being shown.
    pub fn submit(&mut self) -> Result<StoryRequest, DomainError> {
        match self.phase {
            ViewPhase::Idle | ViewPhase::ErrorShown { .. } => {
                self.phase = ViewPhase::Submitting;
                Ok(self.form.clone())
            }
            ViewPhase::Submitting => Err(DomainError::Validation(
                "a story request is already in flight".to_owned(),
            )),
            ViewPhase::StoryShown { .. } => Err(DomainError::Validation(
                "restart before requesting another story".to_owned(),
            )),
        }
    }

    /// Applies the server's answer to a pending submission. The failure
    /// message shown is the interface's own, not the server's.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if nothing was submitted.
    pub fn receive(&mut self, result: StoryResult) -> Result<(), DomainError> {
        if self.phase != ViewPhase::Submitting {
            return Err(DomainError::Validation(
                "no story request is in flight".to_owned(),
            ));
        }

        self.phase = match result {
            StoryResult::Story { story, is_arabic } => ViewPhase::StoryShown { story, is_arabic },
            StoryResult::Failed { .. } => self.failure_phase(),
        };
        Ok(())
    }

    /// Records a transport-level failure (no response, bad status) for a
    /// pending submission.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if nothing was submitted.
    pub fn fail(&mut self) -> Result<(), DomainError> {
        if self.phase != ViewPhase::Submitting {
            return Err(DomainError::Validation(
                "no story request is in flight".to_owned(),
            ));
        }
        self.phase = self.failure_phase();
        Ok(())
    }

    /// Discards the shown story and brings the form back.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless a story is shown.
    pub fn restart(&mut self) -> Result<(), DomainError> {
        if !matches!(self.phase, ViewPhase::StoryShown { .. }) {
            return Err(DomainError::Validation("no story to restart from".to_owned()));
        }
        self.phase = ViewPhase::Idle;
        Ok(())
    }

    /// Closes the failure alert.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless an alert is shown.
    pub fn dismiss_error(&mut self) -> Result<(), DomainError> {
        if !matches!(self.phase, ViewPhase::ErrorShown { .. }) {
            return Err(DomainError::Validation("no error to dismiss".to_owned()));
        }
        self.phase = ViewPhase::Idle;
        Ok(())
    }

    /// Flips the interface language; allowed in every phase.
    pub fn toggle_language(&mut self) {
        self.ui_language = self.ui_language.toggled();
    }

    /// Text direction for the story panel.
    #[must_use]
    pub fn story_direction(&self) -> &'static str {
        let language = match self.phase {
            ViewPhase::StoryShown { is_arabic, .. } => UiLanguage::from_is_arabic(is_arabic),
            _ => self.ui_language,
        };
        language.direction()
    }

    fn failure_phase(&self) -> ViewPhase {
        ViewPhase::ErrorShown {
            message: self.ui_language.text().error.to_owned(),
        }
    }
}
