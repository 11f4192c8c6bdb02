//! Test completions — fake `TextCompletion` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use hikaya_core::completion::{CompletionRequest, TextCompletion};
use hikaya_core::error::DomainError;

/// A completion service that returns the same text for every call and
/// records each request it receives.
#[derive(Debug)]
pub struct ScriptedCompletion {
    reply: String,
    received: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedCompletion {
    /// Create a new scripted completion that answers every call with `reply`.
    #[must_use]
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn received_requests(&self) -> Vec<CompletionRequest> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextCompletion for ScriptedCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        self.received.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// A completion service that always fails with an upstream error carrying
/// provider-style detail. Counts how many times it was called.
#[derive(Debug, Default)]
pub struct FailingCompletion {
    calls: Mutex<usize>,
}

impl FailingCompletion {
    /// Detail string carried by every error this fake returns.
    pub const DETAIL: &'static str = "status 429: insufficient_quota for org-test";

    /// Create a new failing completion.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `complete` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl TextCompletion for FailingCompletion {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, DomainError> {
        *self.calls.lock().unwrap() += 1;
        Err(DomainError::Upstream(Self::DETAIL.into()))
    }
}

/// A completion service that panics on every call, for exercising the
/// server's panic handling.
#[derive(Debug, Default)]
pub struct PanickingCompletion;

impl PanickingCompletion {
    /// Message carried by the panic.
    pub const MESSAGE: &'static str = "completion backend exploded";
}

#[async_trait]
impl TextCompletion for PanickingCompletion {
    async fn complete(&self, _request: &CompletionRequest) -> Result<String, DomainError> {
        panic!("{}", Self::MESSAGE)
    }
}
