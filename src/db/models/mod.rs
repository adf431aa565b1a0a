pub mod location;
pub mod section;

pub use location::{LocationObservation, LocationRecord};
pub use section::{ImageDims, Section, SectionInput};
