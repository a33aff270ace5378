//! Scan report model and normalization.

mod normalize;
mod types;

pub use normalize::{normalize, sections_of};
pub use types::{Builder, Issue, Level, Outcome, POPEYE_KIND, Report, Section, Tally};
