use std::collections::HashMap;

use tracing::warn;

use crate::error::{ReposcoreError, Result};
use crate::types::counts::ParticipantCounts;
use crate::types::record::{Category, ContributionRecord, ItemKind};

/// Accumulates raw per-participant tallies from a stream of labeled
/// contribution records.
///
/// Record order does not affect the result. Deduplication is the caller's
/// responsibility: the same GitHub item fed twice is counted twice.
#[derive(Debug, Default)]
pub struct ContributionCounter {
    counts: HashMap<String, ParticipantCounts>,
}

impl ContributionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the counter from an already-tallied mapping, e.g. a cache of
    /// previously collected data.
    pub fn from_counts(counts: HashMap<String, ParticipantCounts>) -> Self {
        Self { counts }
    }

    /// Consumes one record. Records whose state does not qualify for their
    /// kind are ignored; an unrecognized category or kind is an error and
    /// leaves the tally untouched.
    pub fn observe(&mut self, record: &ContributionRecord) -> Result<()> {
        let category = Category::from_label(&record.category).ok_or_else(|| {
            ReposcoreError::InvalidRecord(format!(
                "unrecognized category '{}' (author: {})",
                record.category, record.author
            ))
        })?;
        let kind = ItemKind::from_name(&record.kind).ok_or_else(|| {
            ReposcoreError::InvalidRecord(format!(
                "unrecognized kind '{}' (author: {})",
                record.kind, record.author
            ))
        })?;
        if !record.state.qualifies(kind) {
            return Ok(());
        }
        self.counts
            .entry(record.author.clone())
            .or_default()
            .record(kind, category);
        Ok(())
    }

    /// Consumes a batch, skipping invalid records with a warning instead of
    /// aborting. Returns the number of records skipped.
    pub fn observe_all<'a, I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = &'a ContributionRecord>,
    {
        let mut skipped = 0;
        for record in records {
            if let Err(err) = self.observe(record) {
                warn!("skipping record: {err}");
                skipped += 1;
            }
        }
        skipped
    }

    /// Folds another counter's tallies into this one.
    pub fn merge(&mut self, other: &ContributionCounter) {
        for (author, counts) in &other.counts {
            self.counts.entry(author.clone()).or_default().merge(counts);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn counts(&self) -> &HashMap<String, ParticipantCounts> {
        &self.counts
    }

    pub fn into_counts(self) -> HashMap<String, ParticipantCounts> {
        self.counts
    }
}
