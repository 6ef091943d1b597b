//! Entry drafts: raw form input collected field by field and validated in
//! one step at submit time.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{MeasurementField, NewEntry};

/// A single form value as typed by the user. Clients may send either a JSON
/// number or the raw text of the field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldInput {
    Number(f64),
    Text(String),
}

impl FieldInput {
    /// Anything that is not a finite number is treated as "not provided".
    pub fn parse(&self) -> Option<f64> {
        let value = match self {
            FieldInput::Number(n) => *n,
            FieldInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// Whole-number reading (blood pressure, heart rate); non-positive is absent.
    pub fn parse_whole(&self) -> Option<i32> {
        whole(self.parse())
    }
}

impl From<f64> for FieldInput {
    fn from(n: f64) -> Self {
        FieldInput::Number(n)
    }
}

impl From<&str> for FieldInput {
    fn from(s: &str) -> Self {
        FieldInput::Text(s.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryDraft {
    date: Option<NaiveDate>,
    weight: Option<f64>,
    body_fat_percent: Option<f64>,
    muscle_mass: Option<f64>,
    waist: Option<f64>,
    chest: Option<f64>,
    arms: Option<f64>,
    hips: Option<f64>,
    legs: Option<f64>,
    neck: Option<f64>,
    systolic_bp: Option<f64>,
    diastolic_bp: Option<f64>,
    resting_heart_rate: Option<f64>,
    notes: Option<String>,
}

/// Keep only positive readings; zero and below mean "not provided".
fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

fn whole(value: Option<f64>) -> Option<i32> {
    positive(value)
        .map(f64::round)
        .filter(|v| *v <= f64::from(i32::MAX))
        .map(|v| v as i32)
        .filter(|v| *v > 0)
}

impl EntryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set one numeric field from raw input. Unparseable input clears it.
    pub fn field(mut self, field: MeasurementField, input: impl Into<FieldInput>) -> Self {
        let value = input.into().parse();
        let slot = match field {
            MeasurementField::Weight => &mut self.weight,
            MeasurementField::BodyFatPercent => &mut self.body_fat_percent,
            MeasurementField::MuscleMass => &mut self.muscle_mass,
            MeasurementField::Waist => &mut self.waist,
            MeasurementField::Chest => &mut self.chest,
            MeasurementField::Arms => &mut self.arms,
            MeasurementField::Hips => &mut self.hips,
            MeasurementField::Legs => &mut self.legs,
            MeasurementField::Neck => &mut self.neck,
            MeasurementField::SystolicBp => &mut self.systolic_bp,
            MeasurementField::DiastolicBp => &mut self.diastolic_bp,
            MeasurementField::RestingHeartRate => &mut self.resting_heart_rate,
        };
        *slot = value;
        self
    }

    /// Same as [`EntryDraft::field`], for inputs that may be missing entirely.
    pub fn maybe_field(self, field: MeasurementField, input: Option<FieldInput>) -> Self {
        match input {
            Some(input) => self.field(field, input),
            None => self,
        }
    }

    /// Check the draft as a whole. Only the weight can fail validation;
    /// every other field degrades to absent.
    pub fn validate(self, today: NaiveDate) -> AppResult<NewEntry> {
        let weight = positive(self.weight)
            .ok_or_else(|| AppError::Validation("Please enter a valid weight".into()))?;

        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(NewEntry {
            date: self.date.unwrap_or(today),
            weight,
            body_fat_percent: positive(self.body_fat_percent),
            muscle_mass: positive(self.muscle_mass),
            waist: positive(self.waist),
            chest: positive(self.chest),
            arms: positive(self.arms),
            hips: positive(self.hips),
            legs: positive(self.legs),
            neck: positive(self.neck),
            systolic_bp: whole(self.systolic_bp),
            diastolic_bp: whole(self.diastolic_bp),
            resting_heart_rate: whole(self.resting_heart_rate),
            notes,
        })
    }
}
