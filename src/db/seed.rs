use chrono::{Duration, NaiveDate};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::MeasurementField;
use crate::services::draft::EntryDraft;

use super::entries::{count_entries, insert_entry};

/// Sample entries: (days ago, weight, body fat, muscle mass, waist, chest, arms, notes)
const SAMPLE_ENTRIES: [(i64, f64, f64, f64, f64, f64, f64, &str); 2] = [
    (0, 175.5, 15.2, 145.0, 32.0, 42.0, 15.5, "Feeling great today!"),
    (7, 177.2, 15.8, 144.2, 32.5, 41.8, 15.2, "Started new workout routine"),
];

/// Populate an empty store with a couple of entries so the history and chart
/// screens have something to show. Returns how many entries were inserted.
pub async fn seed_sample_data(db: &SqlitePool, today: NaiveDate) -> AppResult<usize> {
    if count_entries(db).await? > 0 {
        tracing::debug!("Store already has entries, skipping sample data");
        return Ok(0);
    }

    for (days_ago, weight, body_fat, muscle, waist, chest, arms, notes) in SAMPLE_ENTRIES {
        let entry = EntryDraft::new()
            .date(today - Duration::days(days_ago))
            .field(MeasurementField::Weight, weight)
            .field(MeasurementField::BodyFatPercent, body_fat)
            .field(MeasurementField::MuscleMass, muscle)
            .field(MeasurementField::Waist, waist)
            .field(MeasurementField::Chest, chest)
            .field(MeasurementField::Arms, arms)
            .notes(notes)
            .validate(today)?;
        insert_entry(db, &entry).await?;
    }

    tracing::info!(count = SAMPLE_ENTRIES.len(), "Seeded sample entries");
    Ok(SAMPLE_ENTRIES.len())
}
