use axum::{
    extract::{Query, State},
    Json,
};

use crate::db::entries as store;
use crate::dto::{SeriesQuery, SeriesResponse};
use crate::error::AppResult;
use crate::services::series::{compute_series, compute_statistics};
use crate::services::summary::{summarize, Summary};
use crate::AppState;

use super::today;

pub async fn get_series(
    State(state): State<AppState>,
    Query(query): Query<SeriesQuery>,
) -> AppResult<Json<SeriesResponse>> {
    let field = query.field.unwrap_or_default();
    let range = query.range.unwrap_or_default();

    let entries = store::list_entries(&state.db, None, None).await?;
    let points = compute_series(&entries, field, range.days(), today());
    let statistics = compute_statistics(&points);

    tracing::debug!(field = field.as_str(), range = range.label(), points = points.len(), "Series computed");

    Ok(Json(SeriesResponse {
        field,
        label: field.label(),
        unit: field.unit(),
        range,
        range_label: range.label(),
        points,
        statistics,
    }))
}

pub async fn get_summary(State(state): State<AppState>) -> AppResult<Json<Summary>> {
    let entries = store::list_entries(&state.db, None, None).await?;
    Ok(Json(summarize(&entries)))
}
