//! Time-window aggregation of classified location records.
//!
//! Observation counts are reported per section in fixed 2-hour windows.
//! Window phase is anchored to each section's own earliest observation
//! (floored to a 2-hour mark), not to a global origin, so two sections can
//! report differently-phased windows on the same day.

use chrono::{DateTime, Duration, NaiveDate, Timelike, Utc};
use indexmap::IndexMap;

use crate::errors::TrackerError;

const WINDOW_HOURS: i64 = 2;

/// Ordered (window label, observation count) pairs for one section.
pub type WindowCounts = Vec<(String, u64)>;

/// Per-section window counts, keyed in order of first appearance in the
/// record stream.
pub type SectionCounts = IndexMap<String, WindowCounts>;

/// Buckets each section's timestamps into 2-hour windows and reports the
/// windows whose left edge falls on `target`.
///
/// Windows are half-open `[left, left + 2h)` and cover the span from the
/// section's earliest timestamp (floored to a 2-hour mark) through its
/// latest. Windows with no observations still appear, with a zero count.
/// A section present in `rows` but with no window on the target date maps
/// to an empty list.
pub fn aggregate_by_window(rows: &[(String, DateTime<Utc>)], target: NaiveDate) -> SectionCounts {
    let mut grouped: IndexMap<String, Vec<DateTime<Utc>>> = IndexMap::new();
    for (section, timestamp) in rows {
        grouped
            .entry(section.clone())
            .or_default()
            .push(*timestamp);
    }

    grouped
        .into_iter()
        .map(|(section, timestamps)| {
            let counts = window_counts(&timestamps, target);
            (section, counts)
        })
        .collect()
}

/// Parses a `YYYY-MM-DD` target date from the caller.
pub fn parse_target_date(raw: &str) -> Result<NaiveDate, TrackerError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| TrackerError::validation(format!("invalid target date '{raw}': {err}")))
}

fn floor_to_window(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    let hour = timestamp.hour() - timestamp.hour() % 2;
    timestamp
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
}

fn window_counts(timestamps: &[DateTime<Utc>], target: NaiveDate) -> WindowCounts {
    // Callers only pass sections that have at least one record.
    let latest = *timestamps.iter().max().unwrap();
    let earliest = *timestamps.iter().min().unwrap();

    let step = Duration::hours(WINDOW_HOURS);
    let mut counts = Vec::new();
    let mut left = floor_to_window(earliest);

    // `left <= latest` rather than `left < ceil(latest)`: a timestamp
    // sitting exactly on the final 2-hour mark still gets a containing
    // window.
    while left <= latest {
        let right = left + step;
        if left.date_naive() == target {
            let count = timestamps
                .iter()
                .filter(|ts| left <= **ts && **ts < right)
                .count() as u64;
            counts.push((format!("{:02}:00", left.hour()), count));
        }
        left = right;
    }

    counts
}
