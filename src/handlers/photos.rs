use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::db::entries as store;
use crate::dto::EntryResponse;
use crate::error::{AppError, AppResult};
use crate::AppState;

/// Best-effort content type from the payload's magic bytes.
fn sniff_content_type(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        "image/png"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else {
        "application/octet-stream"
    }
}

/// PUT /api/entries/{id}/photo. The body is the raw image.
///
/// Bodies over `max_photo_bytes` are cut off by the router's body limit and
/// surface here as a length-limit rejection.
pub async fn upload_photo(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<EntryResponse>> {
    let body = body.map_err(|rejection| match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(format!(
            "Photo must be at most {} bytes",
            state.config.max_photo_bytes
        )),
        _ => AppError::from(rejection),
    })?;
    if body.is_empty() {
        return Err(AppError::Validation("Photo payload is empty".into()));
    }

    if !store::set_photo(&state.db, entry_id, Some(body.as_ref())).await? {
        return Err(AppError::NotFound("Entry not found".into()));
    }

    tracing::info!(entry_id = %entry_id, bytes = body.len(), "Photo attached");

    let entry = store::get_entry(&state.db, entry_id)
        .await?
        .ok_or(AppError::NotFound("Entry not found".into()))?;

    Ok(Json(entry.into()))
}

pub async fn get_photo(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let photo = store::get_photo(&state.db, entry_id)
        .await?
        .ok_or(AppError::NotFound("Entry not found".into()))?
        .ok_or(AppError::NotFound("Entry has no photo".into()))?;

    Ok(([(header::CONTENT_TYPE, sniff_content_type(&photo))], photo))
}

pub async fn delete_photo(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
) -> AppResult<Json<EntryResponse>> {
    if !store::set_photo(&state.db, entry_id, None).await? {
        return Err(AppError::NotFound("Entry not found".into()));
    }

    tracing::info!(entry_id = %entry_id, "Photo removed");

    let entry = store::get_entry(&state.db, entry_id)
        .await?
        .ok_or(AppError::NotFound("Entry not found".into()))?;

    Ok(Json(entry.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_content_type() {
        assert_eq!(sniff_content_type(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
        assert_eq!(sniff_content_type(b"\x89PNG\r\n\x1a\n...."), "image/png");
        assert_eq!(sniff_content_type(b"GIF89a"), "image/gif");
        assert_eq!(sniff_content_type(b"hello"), "application/octet-stream");
    }
}
