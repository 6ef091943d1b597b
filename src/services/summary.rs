use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Entry, Severity};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub display: String,
    pub unit: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsSummary {
    pub blood_pressure: Option<Reading>,
    pub resting_heart_rate: Option<Reading>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub entry_count: usize,
    pub latest_date: Option<NaiveDate>,
    pub current_weight: Option<f64>,
    pub starting_weight: Option<f64>,
    pub total_change: Option<f64>,
    /// Present only when at least one entry recorded vital signs
    pub vitals: Option<VitalsSummary>,
}

pub fn summarize(entries: &[Entry]) -> Summary {
    let latest = entries.iter().max_by_key(|e| (e.date, e.created_at));
    let earliest = entries.iter().min_by_key(|e| (e.date, e.created_at));

    let total_change = match (latest, earliest) {
        (Some(l), Some(e)) => Some(l.weight - e.weight),
        _ => None,
    };

    let vitals = match latest {
        Some(l) if entries.iter().any(Entry::has_vital_signs) => Some(latest_vitals(l)),
        _ => None,
    };

    Summary {
        entry_count: entries.len(),
        latest_date: latest.map(|e| e.date),
        current_weight: latest.map(|e| e.weight),
        starting_weight: earliest.map(|e| e.weight),
        total_change,
        vitals,
    }
}

fn latest_vitals(entry: &Entry) -> VitalsSummary {
    let bp_display = entry.display_blood_pressure();
    let blood_pressure = (!bp_display.is_empty()).then(|| {
        let category = entry.blood_pressure_category();
        Reading {
            display: bp_display,
            unit: "mmHg",
            category: category.label(),
            severity: category.severity(),
            color: category.color(),
        }
    });

    let hr_display = entry.display_resting_heart_rate();
    let resting_heart_rate = (!hr_display.is_empty()).then(|| {
        let category = entry.heart_rate_category();
        Reading {
            display: hr_display,
            unit: "bpm",
            category: category.label(),
            severity: category.severity(),
            color: category.color(),
        }
    });

    VitalsSummary {
        blood_pressure,
        resting_heart_rate,
    }
}
