use chrono::{DateTime, Utc};
use rusqlite::{params, Row};

use crate::classify::DEFAULT_SECTION;
use crate::db::{
    connection::Database,
    helpers::parse_datetime,
    models::{LocationObservation, LocationRecord},
};
use crate::errors::TrackerError;

fn row_to_location(row: &Row) -> Result<LocationRecord, TrackerError> {
    let timestamp: String = row.get("timestamp")?;

    Ok(LocationRecord {
        id: row.get("id")?,
        person_id: row.get("person_id")?,
        x_pos: row.get("x_pos")?,
        y_pos: row.get("y_pos")?,
        timestamp: parse_datetime(&timestamp, "timestamp")?,
        section: row.get("section")?,
    })
}

impl Database {
    /// Stores one observation. New records start in the default section;
    /// the next committed reclassification assigns their real section.
    pub async fn insert_location(
        &self,
        observation: &LocationObservation,
    ) -> Result<LocationRecord, TrackerError> {
        let record = observation.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO locations (person_id, x_pos, y_pos, timestamp, section)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.person_id,
                    record.x_pos,
                    record.y_pos,
                    record.timestamp.to_rfc3339(),
                    DEFAULT_SECTION,
                ],
            )?;

            Ok(LocationRecord {
                id: conn.last_insert_rowid(),
                person_id: record.person_id,
                x_pos: record.x_pos,
                y_pos: record.y_pos,
                timestamp: record.timestamp,
                section: DEFAULT_SECTION.to_string(),
            })
        })
        .await
    }

    pub async fn list_locations(&self) -> Result<Vec<LocationRecord>, TrackerError> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, person_id, x_pos, y_pos, timestamp, section
                 FROM locations
                 ORDER BY id",
            )?;

            let mut rows = stmt.query([])?;
            let mut records = Vec::new();
            while let Some(row) = rows.next()? {
                records.push(row_to_location(row)?);
            }

            Ok(records)
        })
        .await
    }

    /// Reads every record's (section, timestamp) pair in insertion order,
    /// the input shape the temporal aggregator works over.
    pub async fn section_timestamps(&self) -> Result<Vec<(String, DateTime<Utc>)>, TrackerError> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT section, timestamp
                 FROM locations
                 ORDER BY id",
            )?;

            let mut rows = stmt.query([])?;
            let mut pairs = Vec::new();
            while let Some(row) = rows.next()? {
                let section: String = row.get(0)?;
                let timestamp: String = row.get(1)?;
                pairs.push((section, parse_datetime(&timestamp, "timestamp")?));
            }

            Ok(pairs)
        })
        .await
    }
}
