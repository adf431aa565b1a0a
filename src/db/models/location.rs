//! Location record data models.
//!
//! One record is a single observed (subject, position, time) tuple, tagged
//! with the section its position fell in under the most recently committed
//! section set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored observation. `person_id` repeats across records for the same
/// subject, so it is not a unique-entity count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: i64,
    pub person_id: String,
    pub x_pos: f64,
    pub y_pos: f64,
    pub timestamp: DateTime<Utc>,
    pub section: String,
}

/// Input for ingesting one observation. The stored record starts in the
/// default section until the next committed reclassification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationObservation {
    pub person_id: String,
    pub x_pos: f64,
    pub y_pos: f64,
    pub timestamp: DateTime<Utc>,
}
