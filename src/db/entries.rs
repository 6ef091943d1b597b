use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::{Entry, NewEntry};

/// Columns that make up an `Entry`. The photo blob is reduced to a flag so
/// row reads never pull image bytes.
macro_rules! entry_columns {
    () => {
        "id, date, weight, body_fat_percent, muscle_mass, waist, chest, arms, hips, legs, \
         neck, systolic_bp, diastolic_bp, resting_heart_rate, notes, \
         photo IS NOT NULL AS has_photo, created_at, updated_at"
    };
}

pub async fn list_entries(
    db: &SqlitePool,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<Entry>, sqlx::Error> {
    sqlx::query_as::<_, Entry>(concat!(
        "SELECT ",
        entry_columns!(),
        " FROM entries",
        " WHERE (?1 IS NULL OR date >= ?1) AND (?2 IS NULL OR date <= ?2)",
        " ORDER BY date DESC, created_at DESC",
    ))
    .bind(start)
    .bind(end)
    .fetch_all(db)
    .await
}

pub async fn get_entry(db: &SqlitePool, id: Uuid) -> Result<Option<Entry>, sqlx::Error> {
    sqlx::query_as::<_, Entry>(concat!(
        "SELECT ",
        entry_columns!(),
        " FROM entries WHERE id = ?1",
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn count_entries(db: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM entries")
        .fetch_one(db)
        .await
}

pub async fn insert_entry(db: &SqlitePool, entry: &NewEntry) -> Result<Entry, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Entry>(concat!(
        r#"
        INSERT INTO entries (
            id, date, weight, body_fat_percent, muscle_mass, waist, chest, arms,
            hips, legs, neck, systolic_bp, diastolic_bp, resting_heart_rate,
            notes, photo, created_at, updated_at
        )
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, NULL, ?16, ?16)
        RETURNING "#,
        entry_columns!(),
    ))
    .bind(Uuid::new_v4())
    .bind(entry.date)
    .bind(entry.weight)
    .bind(entry.body_fat_percent)
    .bind(entry.muscle_mass)
    .bind(entry.waist)
    .bind(entry.chest)
    .bind(entry.arms)
    .bind(entry.hips)
    .bind(entry.legs)
    .bind(entry.neck)
    .bind(entry.systolic_bp)
    .bind(entry.diastolic_bp)
    .bind(entry.resting_heart_rate)
    .bind(&entry.notes)
    .bind(now)
    .fetch_one(db)
    .await
}

/// Replace every editable field. The photo and `created_at` are untouched.
pub async fn update_entry(
    db: &SqlitePool,
    id: Uuid,
    entry: &NewEntry,
) -> Result<Option<Entry>, sqlx::Error> {
    sqlx::query_as::<_, Entry>(concat!(
        r#"
        UPDATE entries SET
            date = ?2,
            weight = ?3,
            body_fat_percent = ?4,
            muscle_mass = ?5,
            waist = ?6,
            chest = ?7,
            arms = ?8,
            hips = ?9,
            legs = ?10,
            neck = ?11,
            systolic_bp = ?12,
            diastolic_bp = ?13,
            resting_heart_rate = ?14,
            notes = ?15,
            updated_at = ?16
        WHERE id = ?1
        RETURNING "#,
        entry_columns!(),
    ))
    .bind(id)
    .bind(entry.date)
    .bind(entry.weight)
    .bind(entry.body_fat_percent)
    .bind(entry.muscle_mass)
    .bind(entry.waist)
    .bind(entry.chest)
    .bind(entry.arms)
    .bind(entry.hips)
    .bind(entry.legs)
    .bind(entry.neck)
    .bind(entry.systolic_bp)
    .bind(entry.diastolic_bp)
    .bind(entry.resting_heart_rate)
    .bind(&entry.notes)
    .bind(Utc::now())
    .fetch_optional(db)
    .await
}

pub async fn delete_entry(db: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM entries WHERE id = ?1")
        .bind(id)
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// `None` clears the photo. Returns false when the entry does not exist.
pub async fn set_photo(
    db: &SqlitePool,
    id: Uuid,
    photo: Option<&[u8]>,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE entries SET photo = ?2, updated_at = ?3 WHERE id = ?1")
        .bind(id)
        .bind(photo)
        .bind(Utc::now())
        .execute(db)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Outer `None`: no such entry. Inner `None`: entry without a photo.
pub async fn get_photo(db: &SqlitePool, id: Uuid) -> Result<Option<Option<Vec<u8>>>, sqlx::Error> {
    sqlx::query_scalar::<_, Option<Vec<u8>>>("SELECT photo FROM entries WHERE id = ?1")
        .bind(id)
        .fetch_optional(db)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations};
    use crate::models::MeasurementField;
    use crate::services::draft::EntryDraft;

    async fn test_db() -> SqlitePool {
        let db = create_pool("sqlite::memory:").await.unwrap();
        run_migrations(&db).await.unwrap();
        db
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, n).unwrap()
    }

    fn new_entry(date: NaiveDate, weight: f64) -> NewEntry {
        EntryDraft::new()
            .date(date)
            .field(MeasurementField::Weight, weight)
            .validate(date)
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get_round_trip() {
        let db = test_db().await;
        let mut draft = new_entry(day(5), 180.5);
        draft.waist = Some(32.5);
        draft.systolic_bp = Some(128);
        draft.notes = Some("after run".into());

        let created = insert_entry(&db, &draft).await.unwrap();
        let fetched = get_entry(&db, created.id).await.unwrap().unwrap();

        assert_eq!(fetched.date, day(5));
        assert_eq!(fetched.weight, 180.5);
        assert_eq!(fetched.waist, Some(32.5));
        assert_eq!(fetched.chest, None);
        assert_eq!(fetched.systolic_bp, Some(128));
        assert_eq!(fetched.notes.as_deref(), Some("after run"));
        assert!(!fetched.has_photo);
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_filtered() {
        let db = test_db().await;
        for (d, w) in [(3, 181.0), (9, 178.0), (6, 179.0)] {
            insert_entry(&db, &new_entry(day(d), w)).await.unwrap();
        }

        let all = list_entries(&db, None, None).await.unwrap();
        let dates: Vec<_> = all.iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(9), day(6), day(3)]);

        let bounded = list_entries(&db, Some(day(4)), Some(day(8))).await.unwrap();
        assert_eq!(bounded.len(), 1);
        assert_eq!(bounded[0].date, day(6));
        assert_eq!(count_entries(&db).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let db = test_db().await;
        let mut draft = new_entry(day(5), 180.0);
        draft.arms = Some(15.0);
        let created = insert_entry(&db, &draft).await.unwrap();

        let replacement = new_entry(day(6), 179.0);
        let updated = update_entry(&db, created.id, &replacement).await.unwrap().unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date, day(6));
        assert_eq!(updated.weight, 179.0);
        assert_eq!(updated.arms, None);
        assert_eq!(updated.created_at, created.created_at);

        let missing = update_entry(&db, Uuid::new_v4(), &replacement).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let created = insert_entry(&db, &new_entry(day(5), 180.0)).await.unwrap();
        assert!(delete_entry(&db, created.id).await.unwrap());
        assert!(!delete_entry(&db, created.id).await.unwrap());
        assert!(get_entry(&db, created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_photo_set_get_clear() {
        let db = test_db().await;
        let created = insert_entry(&db, &new_entry(day(5), 180.0)).await.unwrap();

        assert_eq!(get_photo(&db, created.id).await.unwrap(), Some(None));

        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        assert!(set_photo(&db, created.id, Some(bytes.as_slice())).await.unwrap());
        assert_eq!(get_photo(&db, created.id).await.unwrap(), Some(Some(bytes)));
        assert!(get_entry(&db, created.id).await.unwrap().unwrap().has_photo);
        assert!(list_entries(&db, None, None).await.unwrap()[0].has_photo);

        assert!(set_photo(&db, created.id, None).await.unwrap());
        assert_eq!(get_photo(&db, created.id).await.unwrap(), Some(None));

        assert_eq!(get_photo(&db, Uuid::new_v4()).await.unwrap(), None);
        assert!(!set_photo(&db, Uuid::new_v4(), None).await.unwrap());
    }

    #[tokio::test]
    async fn test_non_positive_weight_rejected_by_store() {
        let db = test_db().await;
        let mut draft = new_entry(day(5), 180.0);
        draft.weight = 0.0;
        assert!(insert_entry(&db, &draft).await.is_err());
        assert_eq!(count_entries(&db).await.unwrap(), 0);
    }
}
