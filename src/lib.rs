pub mod aggregate;
pub mod classify;
pub mod config;
pub mod db;
pub mod errors;
pub mod geometry;
pub mod service;

pub use aggregate::{aggregate_by_window, parse_target_date, SectionCounts, WindowCounts};
pub use classify::{classify, ResolvedSection, DEFAULT_SECTION};
pub use config::Config;
pub use db::models::{ImageDims, LocationObservation, LocationRecord, Section, SectionInput};
pub use db::Database;
pub use errors::TrackerError;
pub use geometry::{absolute_bounds, Bounds};
pub use service::TrackerService;
