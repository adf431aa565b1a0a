use chrono::{DateTime, Utc};

use crate::errors::TrackerError;

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>, TrackerError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| {
            TrackerError::persistence(format!("failed to parse stored {field} '{value}': {err}"))
        })
}
