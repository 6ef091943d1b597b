use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::db::entries as store;
use crate::dto::{DeleteResponse, EntryListQuery, EntryRequest, EntryResponse};
use crate::error::{AppError, AppResult};
use crate::services::history;
use crate::AppState;

use super::{today, JsonBody};

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<EntryListQuery>,
) -> AppResult<Json<Vec<EntryResponse>>> {
    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Err(AppError::Validation(
                "start_date must not be after end_date".into(),
            ));
        }
    }

    let mut entries = store::list_entries(&state.db, query.start_date, query.end_date).await?;
    history::sort_for_history(&mut entries);

    let rows = history::with_weight_changes(entries)
        .into_iter()
        .map(|(entry, change)| EntryResponse::from(entry).with_weight_change(change))
        .collect();

    Ok(Json(rows))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
) -> AppResult<Json<EntryResponse>> {
    let entry = store::get_entry(&state.db, entry_id)
        .await?
        .ok_or(AppError::NotFound("Entry not found".into()))?;

    Ok(Json(entry.into()))
}

pub async fn create_entry(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<EntryRequest>,
) -> AppResult<(StatusCode, Json<EntryResponse>)> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let new_entry = body.into_draft().validate(today())?;
    let entry = store::insert_entry(&state.db, &new_entry).await?;

    tracing::info!(entry_id = %entry.id, date = %entry.date, "Entry created");

    Ok((StatusCode::CREATED, Json(entry.into())))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
    JsonBody(body): JsonBody<EntryRequest>,
) -> AppResult<Json<EntryResponse>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let new_entry = body.into_draft().validate(today())?;
    let entry = store::update_entry(&state.db, entry_id, &new_entry)
        .await?
        .ok_or(AppError::NotFound("Entry not found".into()))?;

    tracing::info!(entry_id = %entry.id, "Entry updated");

    Ok(Json(entry.into()))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<Uuid>,
) -> AppResult<Json<DeleteResponse>> {
    if !store::delete_entry(&state.db, entry_id).await? {
        return Err(AppError::NotFound("Entry not found".into()));
    }

    tracing::info!(entry_id = %entry_id, "Entry deleted");

    Ok(Json(DeleteResponse {
        deleted: true,
        id: entry_id,
    }))
}
