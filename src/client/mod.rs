//! Typed client for the recommendation endpoint.
//!
//! [`ApiClient`] is the wire-level wrapper; [`Session`] layers the UI-facing
//! behavior on top: one in-flight request per action, the exclusion set that
//! grows across refreshes, and the single generic error string shown when
//! anything fails.

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{Recommendation, RecommendationRequest},
};

pub mod catalog;

/// Error string surfaced for any failed request, regardless of cause.
pub const GENERIC_ERROR: &str = "Failed to get recommendations";

/// Thin HTTP wrapper for `POST /api`
#[derive(Clone)]
pub struct ApiClient {
    http_client: HttpClient,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.into(),
        }
    }

    /// Posts a preference payload and decodes the recommendation list.
    pub async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<Vec<Recommendation>> {
        let response = self
            .http_client
            .post(format!("{}/api", self.base_url))
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "API returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}

/// Where the session currently is in its request cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Submitting,
    Refreshing,
}

/// One user's recommendation session.
///
/// The exclusion set only ever grows between refreshes; it is emptied when a
/// new base search starts and when the session is reset.
pub struct Session {
    client: ApiClient,
    phase: SessionPhase,
    last_request: Option<RecommendationRequest>,
    excluded_titles: Vec<String>,
    recommendations: Vec<Recommendation>,
    error: Option<String>,
}

impl Session {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            phase: SessionPhase::Idle,
            last_request: None,
            excluded_titles: Vec::new(),
            recommendations: Vec::new(),
            error: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Titles shown so far in this search session.
    pub fn excluded_titles(&self) -> &[String] {
        &self.excluded_titles
    }

    /// Starts a new base search. The exclusion set is cleared before the
    /// request goes out; the request is remembered for later refreshes.
    pub async fn submit(&mut self, request: RecommendationRequest) {
        self.excluded_titles.clear();
        self.phase = SessionPhase::Submitting;
        self.error = None;

        let request = request.with_excluded_titles(Vec::new());
        let outcome = self.client.recommendations(&request).await;
        self.last_request = Some(request);
        self.finish(outcome);
    }

    /// Re-runs the last search with the accumulated exclusion set.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let Some(last_request) = self.last_request.clone() else {
            return Err(AppError::InvalidInput(
                "No search to refresh".to_string(),
            ));
        };

        self.phase = SessionPhase::Refreshing;
        self.error = None;

        let request = last_request.with_excluded_titles(self.excluded_titles.clone());
        let outcome = self.client.recommendations(&request).await;
        self.finish(outcome);
        Ok(())
    }

    /// Drops results, errors, the remembered request, and the exclusion set.
    pub fn reset(&mut self) {
        self.phase = SessionPhase::Idle;
        self.last_request = None;
        self.excluded_titles.clear();
        self.recommendations.clear();
        self.error = None;
    }

    fn finish(&mut self, outcome: AppResult<Vec<Recommendation>>) {
        match outcome {
            Ok(recommendations) => {
                for recommendation in &recommendations {
                    if !self.excluded_titles.contains(&recommendation.title) {
                        self.excluded_titles.push(recommendation.title.clone());
                    }
                }
                self.recommendations = recommendations;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Recommendation request failed");
                self.recommendations.clear();
                self.error = Some(GENERIC_ERROR.to_string());
            }
        }
        self.phase = SessionPhase::Idle;
    }
}
