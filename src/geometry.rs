//! Mapping from percentage-of-image section geometry to absolute pixel
//! bounds.

use crate::db::models::{ImageDims, SectionInput};

/// Absolute pixel bounds of a section, inclusive on all four edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_min <= x && x <= self.x_max && self.y_min <= y && y <= self.y_max
    }
}

/// Converts a section defined in percentages of the reference image into
/// absolute pixel bounds.
///
/// Bounds are not clamped to the image: a section whose offset plus extent
/// exceeds 100% legally reaches past the image edge.
pub fn absolute_bounds(section: &SectionInput, dims: ImageDims) -> Bounds {
    let width = f64::from(dims.width);
    let height = f64::from(dims.height);

    let x_min = section.x / 100.0 * width;
    let x_max = x_min + width * section.width / 100.0;
    let y_min = section.y / 100.0 * height;
    let y_max = y_min + height * section.height / 100.0;

    Bounds {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}
