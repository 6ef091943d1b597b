//! # Weight Tracker: Request/Response DTOs
//!
//! All API contract types in one module.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body
//! - `*Query`    → deserialized from query params
//! - `*Response` → serialized to client JSON
//! - Numeric form fields accept a JSON number or raw text; text that does not
//!   parse is treated as "not provided"

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    BloodPressureCategory, Entry, HeartRateCategory, MeasurementField, Severity, TimeRange,
};
use crate::services::draft::{EntryDraft, FieldInput};
use crate::services::series::{Point, Statistics};

// ============================================================================
// Common
// ============================================================================

/// Standard delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: Uuid,
}

// ============================================================================
// Entries
// ============================================================================

/// POST /api/entries and PUT /api/entries/{id}
///
/// An edit submits the whole form again, so PUT replaces every field.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EntryRequest {
    /// Default: today
    pub date: Option<NaiveDate>,

    /// Required, must be positive
    pub weight: Option<FieldInput>,

    pub body_fat_percent: Option<FieldInput>,
    pub muscle_mass: Option<FieldInput>,
    pub waist: Option<FieldInput>,
    pub chest: Option<FieldInput>,
    pub arms: Option<FieldInput>,
    pub hips: Option<FieldInput>,
    pub legs: Option<FieldInput>,
    pub neck: Option<FieldInput>,
    pub systolic_bp: Option<FieldInput>,
    pub diastolic_bp: Option<FieldInput>,
    pub resting_heart_rate: Option<FieldInput>,

    #[validate(length(max = 5000, message = "Notes must be under 5000 characters"))]
    pub notes: Option<String>,
}

impl EntryRequest {
    pub fn into_draft(self) -> EntryDraft {
        let mut draft = EntryDraft::new()
            .maybe_field(MeasurementField::Weight, self.weight)
            .maybe_field(MeasurementField::BodyFatPercent, self.body_fat_percent)
            .maybe_field(MeasurementField::MuscleMass, self.muscle_mass)
            .maybe_field(MeasurementField::Waist, self.waist)
            .maybe_field(MeasurementField::Chest, self.chest)
            .maybe_field(MeasurementField::Arms, self.arms)
            .maybe_field(MeasurementField::Hips, self.hips)
            .maybe_field(MeasurementField::Legs, self.legs)
            .maybe_field(MeasurementField::Neck, self.neck)
            .maybe_field(MeasurementField::SystolicBp, self.systolic_bp)
            .maybe_field(MeasurementField::DiastolicBp, self.diastolic_bp)
            .maybe_field(MeasurementField::RestingHeartRate, self.resting_heart_rate);

        if let Some(date) = self.date {
            draft = draft.date(date);
        }
        if let Some(notes) = self.notes {
            draft = draft.notes(notes);
        }
        draft
    }
}

/// GET /api/entries query params
#[derive(Debug, Deserialize)]
pub struct EntryListQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A classification with everything the UI needs to render it
#[derive(Debug, Serialize)]
pub struct CategoryView<C> {
    pub code: C,
    pub label: &'static str,
    pub severity: Severity,
    pub color: &'static str,
}

impl From<BloodPressureCategory> for CategoryView<BloodPressureCategory> {
    fn from(c: BloodPressureCategory) -> Self {
        Self {
            code: c,
            label: c.label(),
            severity: c.severity(),
            color: c.color(),
        }
    }
}

impl From<HeartRateCategory> for CategoryView<HeartRateCategory> {
    fn from(c: HeartRateCategory) -> Self {
        Self {
            code: c,
            label: c.label(),
            severity: c.severity(),
            color: c.color(),
        }
    }
}

/// Entry as returned by every entries route. Never carries the photo bytes.
#[derive(Debug, Serialize)]
pub struct EntryResponse {
    #[serde(flatten)]
    pub entry: Entry,
    pub has_measurements: bool,
    pub has_vital_signs: bool,
    /// Display strings keyed by field name, plus `blood_pressure`.
    /// Unset readings render as "".
    pub display: BTreeMap<&'static str, String>,
    pub blood_pressure_category: CategoryView<BloodPressureCategory>,
    pub heart_rate_category: CategoryView<HeartRateCategory>,
    /// Weight difference to the previous (older) entry; history list only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_change: Option<f64>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        let mut display: BTreeMap<&'static str, String> = MeasurementField::ALL
            .iter()
            .map(|f| (f.as_str(), f.display_value(&entry)))
            .collect();
        display.insert("blood_pressure", entry.display_blood_pressure());

        Self {
            has_measurements: entry.has_measurements(),
            has_vital_signs: entry.has_vital_signs(),
            display,
            blood_pressure_category: entry.blood_pressure_category().into(),
            heart_rate_category: entry.heart_rate_category().into(),
            weight_change: None,
            entry,
        }
    }
}

impl EntryResponse {
    pub fn with_weight_change(mut self, change: Option<f64>) -> Self {
        self.weight_change = change;
        self
    }
}

// ============================================================================
// Charts
// ============================================================================

/// GET /api/series query params
#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    /// Default: weight
    pub field: Option<MeasurementField>,
    /// "1W", "1M", "3M", "6M", "1Y", "All". Default: "1M"
    pub range: Option<TimeRange>,
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub field: MeasurementField,
    pub label: &'static str,
    pub unit: &'static str,
    pub range: TimeRange,
    pub range_label: &'static str,
    /// Oldest first
    pub points: Vec<Point>,
    /// null when there are no points
    pub statistics: Option<Statistics>,
}

// ============================================================================
// Classification
// ============================================================================

/// GET /api/classify/blood-pressure
#[derive(Debug, Deserialize)]
pub struct BloodPressureQuery {
    pub systolic: Option<FieldInput>,
    pub diastolic: Option<FieldInput>,
}

/// GET /api/classify/heart-rate
#[derive(Debug, Deserialize)]
pub struct HeartRateQuery {
    pub bpm: Option<FieldInput>,
}

#[derive(Debug, Serialize)]
pub struct ClassificationResponse<C> {
    pub display: String,
    #[serde(flatten)]
    pub category: CategoryView<C>,
}

// ============================================================================
// System
// ============================================================================

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}
