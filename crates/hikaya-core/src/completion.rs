//! Text-completion port.

use async_trait::async_trait;

use crate::error::DomainError;

/// A single-shot completion request: one system message, one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Instruction sent with the system role.
    pub system_instruction: String,
    /// Prompt sent with the user role.
    pub user_prompt: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// An external service that turns a prompt into text.
///
/// Implementations make exactly one attempt per call; retries are not part
/// of the contract.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Requests a completion and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Upstream` for transport failures, non-success
    /// responses, missing credentials, or malformed payloads.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError>;
}
