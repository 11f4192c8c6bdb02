//! Routes for story generation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use hikaya_story::application::command_handlers;
use hikaya_story::domain::commands::GenerateStory;
use hikaya_story::domain::request::StoryRequest;
use hikaya_story::domain::result::StoryResult;

use crate::error::ApiError;
use crate::extract::AppJson;
use crate::state::AppState;

/// Request body for POST /generateStory.
///
/// Every field is optional on the wire so a missing one is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateStoryRequest {
    pub child_name: Option<String>,
    pub favorite_animal: Option<String>,
    pub topic: Option<String>,
    /// Interface language of the client. Logged, never authoritative.
    pub language: Option<String>,
}

impl GenerateStoryRequest {
    fn into_command(self) -> GenerateStory {
        GenerateStory {
            correlation_id: Uuid::new_v4(),
            request: StoryRequest {
                child_name: self.child_name.unwrap_or_default(),
                favorite_animal: self.favorite_animal.unwrap_or_default(),
                topic: self.topic.unwrap_or_default(),
            },
            language_hint: self.language,
        }
    }
}

/// POST /generateStory
#[instrument(skip(state, request))]
async fn generate_story(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateStoryRequest>,
) -> Result<(StatusCode, Json<StoryResult>), ApiError> {
    let command = request.into_command();

    info!(correlation_id = %command.correlation_id, "handling generate_story command");

    let result = command_handlers::generate_story(
        &command,
        state.completion.as_ref(),
        state.settings,
    )
    .await?;

    let status = if result.is_failure() {
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::OK
    };

    Ok((status, Json(result)))
}

/// Returns the router for story generation.
pub fn router() -> Router<AppState> {
    Router::new().route("/generateStory", post(generate_story))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MALFORMED_BODY_MESSAGE;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use hikaya_core::completion::TextCompletion;
    use hikaya_story::application::command_handlers::GenerationSettings;
    use hikaya_story::domain::result::FAILURE_MESSAGE;
    use hikaya_test_support::{FailingCompletion, ScriptedCompletion};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app_state_with(completion: Arc<dyn TextCompletion>) -> AppState {
        AppState::new(completion, GenerationSettings::default())
    }

    fn post_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generateStory")
            .header("content-type", "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body_bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_story_returns_200_with_story() {
        // Arrange
        let completion = Arc::new(ScriptedCompletion::new("Ali the lion told the truth."));
        let app = router().with_state(app_state_with(completion.clone()));
        let body = serde_json::json!({
            "childName": "Ali",
            "favoriteAnimal": "lion",
            "topic": "honesty",
            "language": "english",
        });

        // Act
        let response = app
            .oneshot(post_request(&body.to_string()))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::OK);

        let json = read_json(response).await;
        assert_eq!(json["story"], "Ali the lion told the truth.");
        assert_eq!(json["isArabic"], false);
        assert_eq!(completion.received_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_story_returns_400_for_missing_field() {
        // Arrange
        let completion = Arc::new(ScriptedCompletion::new("unused"));
        let app = router().with_state(app_state_with(completion.clone()));

        // Act
        let response = app
            .oneshot(post_request(r#"{ "childName": "Ali", "topic": "honesty" }"#))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(json["error"], "missing required fields: favoriteAnimal");
        assert!(completion.received_requests().is_empty());
    }

    #[tokio::test]
    async fn test_generate_story_returns_400_for_null_field() {
        // Arrange
        let completion = Arc::new(ScriptedCompletion::new("unused"));
        let app = router().with_state(app_state_with(completion.clone()));

        // Act
        let response = app
            .oneshot(post_request(
                r#"{ "childName": "Ali", "favoriteAnimal": null, "topic": "honesty" }"#,
            ))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(json["error"], "missing required fields: favoriteAnimal");
        assert!(completion.received_requests().is_empty());
    }

    #[tokio::test]
    async fn test_generate_story_returns_400_json_error_for_wrong_field_type() {
        // Arrange
        let completion = Arc::new(ScriptedCompletion::new("unused"));
        let app = router().with_state(app_state_with(completion.clone()));

        // Act
        let response = app
            .oneshot(post_request(r#"{ "childName": 42 }"#))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");

        let json = read_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": MALFORMED_BODY_MESSAGE }));
        assert!(completion.received_requests().is_empty());
    }

    #[tokio::test]
    async fn test_generate_story_returns_400_json_error_for_invalid_json() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(ScriptedCompletion::new("x"))));

        // Act
        let response = app.oneshot(post_request("{not json")).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(json["error"], MALFORMED_BODY_MESSAGE);
    }

    #[tokio::test]
    async fn test_generate_story_returns_400_json_error_without_content_type() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(ScriptedCompletion::new("x"))));
        let request = Request::builder()
            .method("POST")
            .uri("/generateStory")
            .body(Body::from(r#"{ "childName": "Ali" }"#))
            .unwrap();

        // Act
        let response = app.oneshot(request).await.unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = read_json(response).await;
        assert_eq!(json["error"], MALFORMED_BODY_MESSAGE);
    }

    #[tokio::test]
    async fn test_generate_story_returns_500_with_generic_error_when_upstream_fails() {
        // Arrange
        let app = router().with_state(app_state_with(Arc::new(FailingCompletion::new())));
        let body = serde_json::json!({
            "childName": "Ali",
            "favoriteAnimal": "lion",
            "topic": "honesty",
        });

        // Act
        let response = app
            .oneshot(post_request(&body.to_string()))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = read_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": FAILURE_MESSAGE }));
        assert!(!json.to_string().contains(FailingCompletion::DETAIL));
    }
}
