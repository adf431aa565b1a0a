//! Public operations, exposed as plain calls for an outer service layer to
//! map onto its endpoints.

use chrono::{Duration, NaiveDate, Utc};

use crate::aggregate::{aggregate_by_window, SectionCounts};
use crate::db::{
    models::{ImageDims, LocationObservation, LocationRecord, Section, SectionInput},
    Database,
};
use crate::errors::TrackerError;

#[derive(Clone)]
pub struct TrackerService {
    db: Database,
}

impl TrackerService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Ingests one observation. The record starts in the default section
    /// until the next committed reclassification.
    pub async fn record_location(
        &self,
        observation: LocationObservation,
    ) -> Result<LocationRecord, TrackerError> {
        self.db.insert_location(&observation).await
    }

    pub async fn list_locations(&self) -> Result<Vec<LocationRecord>, TrackerError> {
        self.db.list_locations().await
    }

    /// Replaces the section set drawn over an image of the given dimensions
    /// and atomically retags every stored record against it. Returns the
    /// number of records re-evaluated.
    pub async fn reclassify_sections(
        &self,
        sections: Vec<SectionInput>,
        dims: ImageDims,
    ) -> Result<usize, TrackerError> {
        self.db.replace_sections(sections, dims).await
    }

    /// Current section set in insertion order, for rendering the layout.
    pub async fn list_sections(&self) -> Result<Vec<Section>, TrackerError> {
        self.db.list_sections().await
    }

    /// Per-section observation counts in 2-hour windows on the target day.
    pub async fn aggregated_counts(
        &self,
        target: NaiveDate,
    ) -> Result<SectionCounts, TrackerError> {
        let rows = self.db.section_timestamps().await?;
        Ok(aggregate_by_window(&rows, target))
    }

    /// Same read, parameterized by a day offset back from today (UTC).
    pub async fn aggregated_counts_days_ago(
        &self,
        days: u32,
    ) -> Result<SectionCounts, TrackerError> {
        let target = Utc::now().date_naive() - Duration::days(i64::from(days));
        self.aggregated_counts(target).await
    }
}
