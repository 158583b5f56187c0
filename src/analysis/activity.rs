//! Weekday, month and hour-by-weekday activity.
//!
//! Axes are fixed: weekdays run Monday to Sunday, months January to
//! December, hours `0-1` to `23-24`. Empty slots are reported as zero so a
//! chart never loses a column.

use chrono::Datelike;
use serde::Serialize;

use crate::core::filter::UserFilter;
use crate::record::{ChatRecord, WEEKDAYS, hour_bucket, month_name, weekday_name};

/// A `(label, count)` pair ready for charting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: usize,
}

/// Message counts per weekday, Monday first. Always 7 entries.
pub fn weekday_activity(records: &[ChatRecord], filter: &UserFilter) -> Vec<LabeledCount> {
    let mut counts = [0usize; 7];
    for record in filter.select(records) {
        counts[record.weekday().num_days_from_monday() as usize] += 1;
    }

    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(day, count)| LabeledCount {
            label: weekday_name(*day).to_string(),
            count,
        })
        .collect()
}

/// Message counts per calendar month, January first. Always 12 entries.
pub fn month_activity(records: &[ChatRecord], filter: &UserFilter) -> Vec<LabeledCount> {
    let mut counts = [0usize; 12];
    for record in filter.select(records) {
        counts[record.timestamp().month0() as usize] += 1;
    }

    (1..=12)
        .zip(counts)
        .map(|(month, count)| LabeledCount {
            label: month_name(month).to_string(),
            count,
        })
        .collect()
}

/// Hour-by-weekday message matrix.
///
/// Rows are weekdays (Monday first), columns hour buckets (`0-1` first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for a weekday (`0` = Monday) and hour.
    pub fn get(&self, weekday: usize, hour: usize) -> Option<usize> {
        self.cells.get(weekday)?.get(hour).copied()
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

/// Builds the 7x24 activity heatmap; every cell is present, zero if unused.
///
/// ```
/// use chatstats::analysis::activity_heatmap;
/// use chatstats::core::filter::UserFilter;
///
/// let heatmap = activity_heatmap(&[], &UserFilter::Overall);
/// assert_eq!(heatmap.rows.len(), 7);
/// assert_eq!(heatmap.columns.len(), 24);
/// assert_eq!(heatmap.columns[23], "23-24");
/// assert_eq!(heatmap.total(), 0);
/// ```
pub fn activity_heatmap(records: &[ChatRecord], filter: &UserFilter) -> Heatmap {
    let mut cells = vec![vec![0usize; 24]; 7];
    for record in filter.select(records) {
        let row = record.weekday().num_days_from_monday() as usize;
        let col = record.calendar().hour as usize;
        cells[row][col] += 1;
    }

    Heatmap {
        rows: WEEKDAYS.iter().map(|d| weekday_name(*d).to_string()).collect(),
        columns: (0..24).map(hour_bucket).collect(),
        cells,
    }
}
