use std::cmp::Reverse;

use crate::models::Entry;

/// Newest first. Entries on the same day keep the order they were created in,
/// latest on top.
pub fn sort_for_history(entries: &mut [Entry]) {
    entries.sort_by_key(|e| Reverse((e.date, e.created_at)));
}

/// Pair each row of a history list (newest first) with its weight change
/// relative to the row below it. The oldest row has no change.
pub fn with_weight_changes(entries: Vec<Entry>) -> Vec<(Entry, Option<f64>)> {
    let changes: Vec<Option<f64>> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| entries.get(i + 1).map(|older| e.weight - older.weight))
        .collect();

    entries.into_iter().zip(changes).collect()
}
