//! Section data models.

use serde::{Deserialize, Serialize};

use crate::errors::TrackerError;

/// A stored section: a named rectangle in percentage-of-image coordinates.
///
/// `id` is assigned by the store and orders sections by insertion, which is
/// also the classification tie-break order. Labels are not required to be
/// unique; callers should treat duplicates as ambiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub text: String,
}

/// Input for one section in a replacement set. All four geometry fields are
/// percentages (0–100) of the reference image's width/height.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionInput {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SectionInput {
    /// Rejects non-finite or negative geometry. Values past 100% are
    /// accepted: such a section extends beyond the image.
    pub fn validate(&self) -> Result<(), TrackerError> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TrackerError::validation(format!(
                    "section '{}': {field} must be a finite non-negative percentage, got {value}",
                    self.text
                )));
            }
        }
        Ok(())
    }
}

/// Pixel dimensions of the reference image a section set was drawn over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImageDims {
    pub width: u32,
    pub height: u32,
}

impl ImageDims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.width == 0 || self.height == 0 {
            return Err(TrackerError::validation(format!(
                "image dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
