//! Point-in-section classification.

use crate::geometry::Bounds;

/// Section label written onto records no stored section contains.
pub const DEFAULT_SECTION: &str = "Others";

/// A section whose bounds have been resolved to absolute pixels for one
/// reclassification pass.
#[derive(Debug, Clone)]
pub struct ResolvedSection {
    pub label: String,
    pub bounds: Bounds,
}

/// Returns the label of the first section containing the point, walking
/// sections in storage order, or [`DEFAULT_SECTION`] when none does.
///
/// When sections overlap, the earliest-inserted one wins.
pub fn classify(x: f64, y: f64, sections: &[ResolvedSection]) -> &str {
    sections
        .iter()
        .find(|section| section.bounds.contains(x, y))
        .map(|section| section.label.as_str())
        .unwrap_or(DEFAULT_SECTION)
}
