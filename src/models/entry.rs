use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::vitals::{BloodPressureCategory, HeartRateCategory};

/// One logged observation. Optional readings are `None` when not provided;
/// a stored value only counts as "set" when it is positive.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub weight: f64,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist: Option<f64>,
    pub chest: Option<f64>,
    pub arms: Option<f64>,
    pub hips: Option<f64>,
    pub legs: Option<f64>,
    pub neck: Option<f64>,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub resting_heart_rate: Option<i32>,
    pub notes: Option<String>,
    /// The image itself is only read through the photo routes.
    pub has_photo: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated field values for an entry that is about to be written.
/// Produced by `EntryDraft::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub weight: f64,
    pub body_fat_percent: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub waist: Option<f64>,
    pub chest: Option<f64>,
    pub arms: Option<f64>,
    pub hips: Option<f64>,
    pub legs: Option<f64>,
    pub neck: Option<f64>,
    pub systolic_bp: Option<i32>,
    pub diastolic_bp: Option<i32>,
    pub resting_heart_rate: Option<i32>,
    pub notes: Option<String>,
}

fn is_set(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

fn is_set_int(value: Option<i32>) -> bool {
    value.is_some_and(|v| v > 0)
}

/// Render an optional reading with a fixed number of decimals.
/// Absent and non-positive values render as an empty string.
pub fn format_measurement(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) if v > 0.0 => format!("{:.*}", precision, v),
        _ => String::new(),
    }
}

/// Whole-number readings (blood pressure, heart rate).
pub fn format_vital(value: Option<i32>) -> String {
    format_measurement(value.map(f64::from), 0)
}

/// "S/D", "S/-", "-/D" or "" depending on which readings are set.
pub fn format_blood_pressure(systolic: Option<i32>, diastolic: Option<i32>) -> String {
    match (is_set_int(systolic), is_set_int(diastolic)) {
        (true, true) => format!("{}/{}", format_vital(systolic), format_vital(diastolic)),
        (true, false) => format!("{}/-", format_vital(systolic)),
        (false, true) => format!("-/{}", format_vital(diastolic)),
        (false, false) => String::new(),
    }
}

impl Entry {
    pub fn has_measurements(&self) -> bool {
        [
            self.body_fat_percent,
            self.muscle_mass,
            self.waist,
            self.chest,
            self.arms,
            self.hips,
            self.legs,
            self.neck,
        ]
        .into_iter()
        .any(is_set)
    }

    pub fn has_vital_signs(&self) -> bool {
        is_set_int(self.systolic_bp)
            || is_set_int(self.diastolic_bp)
            || is_set_int(self.resting_heart_rate)
    }

    pub fn blood_pressure_category(&self) -> BloodPressureCategory {
        BloodPressureCategory::classify(self.systolic_bp, self.diastolic_bp)
    }

    pub fn heart_rate_category(&self) -> HeartRateCategory {
        HeartRateCategory::classify(self.resting_heart_rate)
    }

    pub fn display_blood_pressure(&self) -> String {
        format_blood_pressure(self.systolic_bp, self.diastolic_bp)
    }

    pub fn display_resting_heart_rate(&self) -> String {
        format_vital(self.resting_heart_rate)
    }
}
