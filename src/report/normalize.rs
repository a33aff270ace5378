//! Turns raw sanitizer output into the sections shown to the user.

use super::types::{Builder, Section};
use crate::error::Result;
use crate::host::Resource;

/// Decodes `raw` and returns the sections that have something to show.
///
/// Sections are ordered by name, their resource count is recomputed from
/// the outcome, and sections whose tally sums to zero are dropped. A
/// malformed document fails the whole call.
pub fn normalize(raw: &[u8]) -> Result<Vec<Section>> {
    let mut builder: Builder = serde_json::from_slice(raw)?;
    builder.report.sort_sections();

    let sections = builder
        .report
        .sections
        .into_iter()
        .filter_map(|mut section| {
            section.tally.count = section.outcome.len();
            (section.tally.sum() > 0).then_some(section)
        })
        .collect();

    Ok(sections)
}

/// Recovers the sections behind type-erased resources, skipping anything
/// that is not a section.
pub fn sections_of(resources: &[Box<dyn Resource>]) -> Vec<&Section> {
    resources
        .iter()
        .filter_map(|r| r.as_any().downcast_ref::<Section>())
        .collect()
}
