use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{error::AppResult, models::RecommendationRequest, services::recommendations};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Handler for the recommendation endpoint
///
/// Forwards whatever JSON value the model produced; errors map to
/// `{ "error": message }` bodies via `AppError`.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Value>> {
    let recommendations =
        recommendations::get_recommendations(state.provider.clone(), &request).await?;
    Ok(Json(recommendations))
}
