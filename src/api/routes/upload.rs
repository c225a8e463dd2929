use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::storage::parse_matches;

/// Multipart field carrying the CSV payload.
pub const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub ok: bool,
    pub path: String,
}

/// Pull the `file` part out of the form. An unnamed or empty file counts as
/// no file.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<Bytes>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // Browsers send an empty filename when no file was picked.
        if field.file_name() == Some("") {
            return Ok(None);
        }
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        return Ok((!bytes.is_empty()).then_some(bytes));
    }
    Ok(None)
}

/// Replace the dataset with an uploaded CSV file.
///
/// The payload is fully parsed before the store is touched, so a rejected
/// upload leaves the current data in place.
pub async fn upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let payload = read_file_field(&mut multipart)
        .await?
        .ok_or_else(|| ApiError::BadRequest(format!("No '{}' part in upload", FILE_FIELD)))?;

    let records =
        parse_matches(&payload[..]).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let store = state.store.clone();
    let count = tokio::task::spawn_blocking(move || {
        store.replace(&records).map(|()| records.len())
    })
    .await
    .map_err(|e| ApiError::Internal(format!("replace task failed: {}", e)))??;

    let path = state.store.location();
    info!("Replaced dataset with {} matches at {}", count, path);

    Ok(Json(UploadResponse { ok: true, path }))
}
