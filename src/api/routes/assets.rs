use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use crate::api::state::AppState;

/// Plain-text landing response when no front-end is deployed.
pub const STATUS_TEXT: &str = "Match stats API is running";

/// Serve `index.html` from the static directory, or a status line without one.
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.server.static_dir.join("index.html");
    match tokio::fs::read(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            debug!("No landing page at {:?}: {}", path, e);
            STATUS_TEXT.into_response()
        }
    }
}
