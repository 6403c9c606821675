/// Open Library autocomplete support
///
/// A passthrough to the public search endpoint: docs without a title are
/// dropped, duplicates are folded case-insensitively, and at most seven
/// suggestions survive. The debouncer mirrors the 300 ms keystroke window
/// the form uses.
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

const SUGGESTION_LIMIT: usize = 7;
const SEARCH_LIMIT: &str = "10";

/// Keystroke debounce window used by the autocomplete field.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    docs: Vec<SearchDoc>,
}

#[derive(Debug, Deserialize)]
struct SearchDoc {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    author_name: Option<Vec<String>>,
}

/// A single autocomplete suggestion
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub title: String,
    pub author: Option<String>,
}

#[derive(Clone)]
pub struct CatalogClient {
    http_client: HttpClient,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches up to seven de-duplicated title suggestions for a query.
    pub async fn suggest(&self, query: &str) -> AppResult<Vec<Suggestion>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search.json", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("limit", SEARCH_LIMIT)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "Open Library returned status {}",
                response.status()
            )));
        }

        let parsed: SearchResponse = response.json().await?;

        let mut seen: Vec<String> = Vec::new();
        let mut suggestions = Vec::new();
        for doc in parsed.docs {
            let Some(title) = doc.title else { continue };
            let key = title.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            suggestions.push(Suggestion {
                title,
                author: doc
                    .author_name
                    .and_then(|authors| authors.into_iter().next()),
            });
            if suggestions.len() == SUGGESTION_LIMIT {
                break;
            }
        }

        tracing::debug!(query = %query, results = suggestions.len(), "Suggestion fetch completed");

        Ok(suggestions)
    }
}

/// Trailing-edge debouncer for autocomplete keystrokes.
///
/// Every keystroke calls [`Debouncer::settle`]; only the call that goes the
/// whole window without being superseded reports `true`.
#[derive(Clone)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn settle(&self) -> bool {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.window).await;
        self.generation.load(Ordering::SeqCst) == token
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_WINDOW)
    }
}
