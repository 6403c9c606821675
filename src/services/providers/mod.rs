/// Completion provider abstraction
///
/// The recommendation flow is written against this trait so the hosted LLM
/// backend can be swapped (or mocked in tests) without touching the prompt
/// or parsing logic. Groq's OpenAI-compatible endpoint is the only shipped
/// implementation.
use crate::error::AppResult;

pub mod groq;

pub use groq::GroqProvider;

/// Trait for chat-completion providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Performs a single non-streaming completion call.
    ///
    /// Returns the raw assistant text. An absent content field comes back as
    /// an empty string; callers decide what an empty completion means.
    async fn complete(&self, system: &str, user: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
