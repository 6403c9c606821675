/// Groq chat-completion provider (OpenAI-compatible API)
///
/// One awaited request per call: no retry, no explicit timeout. Anything
/// that keeps content from coming back is collapsed into
/// `AppError::CompletionFailed` with the detail logged here.
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    services::providers::CompletionProvider,
};

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1024;

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct GroqProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    model: String,
}

impl GroqProvider {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait::async_trait]
impl CompletionProvider for GroqProvider {
    async fn complete(&self, system: &str, user: &str) -> AppResult<String> {
        let url = format!("{}/chat/completions", self.api_url);
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
            "top_p": 1,
            "stream": false
        });

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, provider = "groq", "Completion request failed");
                AppError::CompletionFailed(e.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                %status,
                detail = %detail,
                provider = "groq",
                "Completion API returned error status"
            );
            return Err(AppError::CompletionFailed(format!(
                "API returned status {}: {}",
                status, detail
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, provider = "groq", "Completion response body unreadable");
            AppError::CompletionFailed(e.to_string())
        })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        tracing::debug!(
            model = %self.model,
            content_len = content.len(),
            provider = "groq",
            "Completion call finished"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}
