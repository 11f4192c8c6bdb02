//! HTTP client for the chat-completions endpoint.

use async_trait::async_trait;
use hikaya_core::completion::{CompletionRequest, TextCompletion};
use hikaya_core::error::DomainError;
use reqwest::Client;
use tracing::{debug, error, instrument};

use crate::dto::{ChatMessage, ChatRequest, ChatResponse};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Chat-completions client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiClient {
    /// Creates a client. A missing `api_key` is accepted here and reported
    /// as an upstream error on each call.
    #[must_use]
    pub fn new(
        http: Client,
        api_key: Option<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl TextCompletion for OpenAiClient {
    #[instrument(skip(self, request), fields(model = %self.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let Some(api_key) = self.api_key.as_deref() else {
            error!("OPENAI_API_KEY is not configured");
            return Err(DomainError::Upstream("missing API key".into()));
        };

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(request.system_instruction.clone()),
                ChatMessage::user(request.user_prompt.clone()),
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(max_tokens = body.max_tokens, "sending chat completion request");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                DomainError::Upstream(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(DomainError::Upstream(format!(
                "status {}: {error_text}",
                status.as_u16()
            )));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "failed to parse response");
            DomainError::Upstream(format!("malformed response: {e}"))
        })?;

        let choice = chat.choices.into_iter().next().ok_or_else(|| {
            error!("response contained no choices");
            DomainError::Upstream("no choices in response".into())
        })?;

        debug!(finish_reason = ?choice.finish_reason, "received chat completion");

        choice.message.content.ok_or_else(|| {
            error!("first choice has no text content");
            DomainError::Upstream("empty message content".into())
        })
    }
}
