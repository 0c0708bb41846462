pub mod allocator;
pub mod counter;

use std::collections::HashMap;

use crate::error::{ReposcoreError, Result};
use crate::types::counts::ParticipantCounts;
use crate::types::score::ScoreResult;

/// Immutable scoring result for a whole repository: one `ScoreResult` per
/// participant, built in a single pass over the frozen tallies.
///
/// Participants are scored independently, so this is a plain map over the
/// counts with no cross-participant state.
#[derive(Debug, Default)]
pub struct Scoreboard {
    scores: HashMap<String, ScoreResult>,
}

impl Scoreboard {
    pub fn from_counts(counts: &HashMap<String, ParticipantCounts>) -> Self {
        let scores = counts
            .iter()
            .map(|(name, tally)| (name.clone(), allocator::allocate(tally)))
            .collect();
        Self { scores }
    }

    /// Looks up one participant. Absent identities are an error; callers
    /// that prefer lenient lookups should synthesize an all-zero result.
    pub fn get(&self, name: &str) -> Result<&ScoreResult> {
        self.scores
            .get(name)
            .ok_or_else(|| ReposcoreError::MissingParticipant(name.to_string()))
    }

    /// Lenient lookup: absent participants simply have all-zero counts.
    pub fn get_or_zero(&self, name: &str) -> ScoreResult {
        self.scores.get(name).copied().unwrap_or_default()
    }

    /// Participants ordered by score descending, name ascending on ties.
    pub fn ranking(&self) -> Vec<(&str, &ScoreResult)> {
        let mut ranked: Vec<(&str, &ScoreResult)> = self
            .scores
            .iter()
            .map(|(name, result)| (name.as_str(), result))
            .collect();
        ranked.sort_by(|a, b| b.1.score.cmp(&a.1.score).then_with(|| a.0.cmp(b.0)));
        ranked
    }

    /// 1-based competition rank of a participant: tied scores share the
    /// rank of the best-placed among them.
    pub fn rank_of(&self, name: &str) -> Result<usize> {
        let score = self.get(name)?.score;
        Ok(1 + self
            .scores
            .values()
            .filter(|result| result.score > score)
            .count())
    }

    pub fn total_score(&self) -> u64 {
        self.scores.values().map(|result| result.score).sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
