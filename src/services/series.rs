//! Chart series and the summary statistics shown under the chart.

use chrono::{Duration, NaiveDate};
use serde::Serialize;

use crate::models::{Entry, MeasurementField};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    /// Value of the chronologically last point
    pub current: f64,
    pub average: f64,
    /// Last minus first across the visible window
    pub change: f64,
}

/// Points for `field` within the last `range_days` days of `today`, oldest
/// first. Entries whose value for `field` is absent or non-positive are
/// skipped. `None` for `range_days` keeps the whole history.
pub fn compute_series(
    entries: &[Entry],
    field: MeasurementField,
    range_days: Option<i64>,
    today: NaiveDate,
) -> Vec<Point> {
    let cutoff = range_days.map(|days| today - Duration::days(days));

    let mut points: Vec<Point> = entries
        .iter()
        .filter(|e| cutoff.map_or(true, |c| e.date >= c))
        .filter_map(|e| match field.value(e) {
            Some(value) if value > 0.0 => Some(Point {
                date: e.date,
                value,
            }),
            _ => None,
        })
        .collect();

    points.sort_by_key(|p| p.date);
    points
}

/// `None` when there is nothing to summarize; zero is a legitimate change.
pub fn compute_statistics(points: &[Point]) -> Option<Statistics> {
    let first = points.first()?;
    let last = points.last()?;

    let average = points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64;

    Some(Statistics {
        current: last.value,
        average,
        change: last.value - first.value,
    })
}
