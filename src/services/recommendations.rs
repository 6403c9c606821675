use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::RecommendationRequest,
    services::{prompt, providers::CompletionProvider},
};

/// Runs one full recommendation cycle: build the prompt, make a single
/// completion call, parse the text as JSON.
///
/// The parsed value is returned verbatim. No shape validation happens here:
/// if the model answers with valid JSON that is not a list of six books, the
/// client sees exactly that.
pub async fn get_recommendations(
    provider: Arc<dyn CompletionProvider>,
    request: &RecommendationRequest,
) -> AppResult<Value> {
    let user_prompt = prompt::build_prompt(request);

    let raw = provider.complete(prompt::SYSTEM_PROMPT, &user_prompt).await?;
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        tracing::warn!(provider = provider.name(), "Completion came back empty");
        return Err(AppError::EmptyCompletion);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(recommendations) => Ok(recommendations),
        Err(e) => {
            tracing::error!(
                error = %e,
                raw = %trimmed,
                provider = provider.name(),
                "Completion was not valid JSON"
            );
            Err(AppError::MalformedCompletion)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookPreferences;
    use crate::services::providers::MockCompletionProvider;
    use serde_json::json;

    fn sample_request() -> RecommendationRequest {
        RecommendationRequest::Personalized(BookPreferences {
            favorite_books: "Dune".to_string(),
            least_favorite_books: String::new(),
            preferred_genres: "Sci-Fi".to_string(),
            favorite_authors: "Frank Herbert".to_string(),
            excluded_titles: vec![],
        })
    }

    fn provider_returning(content: &str) -> Arc<dyn CompletionProvider> {
        let content = content.to_string();
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(move |_, _| Ok(content.clone()));
        provider.expect_name().return_const("mock");
        Arc::new(provider)
    }

    #[tokio::test]
    async fn test_valid_json_is_forwarded() {
        let provider = provider_returning(r#"[{"title": "Hyperion"}]"#);
        let value = get_recommendations(provider, &sample_request())
            .await
            .unwrap();
        assert_eq!(value, json!([{ "title": "Hyperion" }]));
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed() {
        let provider = provider_returning("\n  []  \n");
        let value = get_recommendations(provider, &sample_request())
            .await
            .unwrap();
        assert_eq!(value, json!([]));
    }

    #[tokio::test]
    async fn test_malformed_shape_passes_through_unexamined() {
        // Valid JSON with the wrong shape is not this layer's problem.
        let provider = provider_returning(r#"{"oops": true}"#);
        let value = get_recommendations(provider, &sample_request())
            .await
            .unwrap();
        assert_eq!(value, json!({ "oops": true }));
    }

    #[tokio::test]
    async fn test_empty_completion() {
        let provider = provider_returning("   \n ");
        let err = get_recommendations(provider, &sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyCompletion));
        assert_eq!(err.to_string(), "Failed to get a valid response from AI");
    }

    #[tokio::test]
    async fn test_non_json_completion() {
        let provider = provider_returning("Here are six books you might enjoy!");
        let err = get_recommendations(provider, &sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MalformedCompletion));
        assert_eq!(err.to_string(), "Invalid AI response format");
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let mut provider = MockCompletionProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Err(AppError::CompletionFailed("boom".to_string())));
        provider.expect_name().return_const("mock");

        let err = get_recommendations(Arc::new(provider), &sample_request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::CompletionFailed(_)));
    }
}
