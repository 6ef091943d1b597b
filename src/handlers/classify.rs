use axum::{extract::Query, Json};

use crate::dto::{BloodPressureQuery, ClassificationResponse, HeartRateQuery};
use crate::models::entry::{format_blood_pressure, format_vital};
use crate::models::{BloodPressureCategory, HeartRateCategory};
use crate::services::draft::FieldInput;

/// Classify a reading the user is still typing, before it is saved.
pub async fn classify_blood_pressure(
    Query(query): Query<BloodPressureQuery>,
) -> Json<ClassificationResponse<BloodPressureCategory>> {
    let systolic = query.systolic.as_ref().and_then(FieldInput::parse_whole);
    let diastolic = query.diastolic.as_ref().and_then(FieldInput::parse_whole);

    Json(ClassificationResponse {
        display: format_blood_pressure(systolic, diastolic),
        category: BloodPressureCategory::classify(systolic, diastolic).into(),
    })
}

pub async fn classify_heart_rate(
    Query(query): Query<HeartRateQuery>,
) -> Json<ClassificationResponse<HeartRateCategory>> {
    let bpm = query.bpm.as_ref().and_then(FieldInput::parse_whole);

    Json(ClassificationResponse {
        display: format_vital(bpm),
        category: HeartRateCategory::classify(bpm).into(),
    })
}
