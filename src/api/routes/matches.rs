use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate;
use crate::models::{MapAggregate, MatchRecord, Summary, Trends};

// ── Handlers ────────────────────────────────────────────────────
//
// Each handler loads the full table from the store and derives its view.
// Nothing is cached between requests. Store I/O runs on the blocking pool.

async fn load(state: &AppState) -> Result<Vec<MatchRecord>, ApiError> {
    let store = state.store.clone();
    let records = tokio::task::spawn_blocking(move || store.load())
        .await
        .map_err(|e| ApiError::Internal(format!("load task failed: {}", e)))??;
    debug!(
        "Loaded {} matches from {}",
        records.len(),
        state.store.location()
    );
    Ok(records)
}

pub async fn list_matches(
    State(state): State<AppState>,
) -> Result<Json<Vec<MatchRecord>>, ApiError> {
    Ok(Json(load(&state).await?))
}

pub async fn summary(State(state): State<AppState>) -> Result<Json<Summary>, ApiError> {
    let records = load(&state).await?;
    Ok(Json(calculate::summarize(&records)))
}

pub async fn trends(State(state): State<AppState>) -> Result<Json<Trends>, ApiError> {
    let records = load(&state).await?;
    Ok(Json(calculate::trends(&records)))
}

pub async fn maps(State(state): State<AppState>) -> Result<Json<Vec<MapAggregate>>, ApiError> {
    let records = load(&state).await?;
    Ok(Json(calculate::map_aggregates(&records)))
}
