use serde::{Deserialize, Serialize};

use crate::types::record::{Category, ItemKind};

/// Raw activity tally for one participant. Increment-only; frozen once all
/// records are consumed, then read by the allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantCounts {
    /// Merged feature/bug pull requests.
    pub feat_bug_prs: u64,
    /// Merged documentation pull requests.
    pub doc_prs: u64,
    /// Open or resolved feature/bug issues.
    pub feat_bug_issues: u64,
    /// Open or resolved documentation issues.
    pub doc_issues: u64,
}

impl ParticipantCounts {
    pub fn new(feat_bug_prs: u64, doc_prs: u64, feat_bug_issues: u64, doc_issues: u64) -> Self {
        Self {
            feat_bug_prs,
            doc_prs,
            feat_bug_issues,
            doc_issues,
        }
    }

    pub fn record(&mut self, kind: ItemKind, category: Category) {
        match (kind, category) {
            (ItemKind::PullRequest, Category::Feature | Category::Bug) => self.feat_bug_prs += 1,
            (ItemKind::PullRequest, Category::Documentation) => self.doc_prs += 1,
            (ItemKind::Issue, Category::Feature | Category::Bug) => self.feat_bug_issues += 1,
            (ItemKind::Issue, Category::Documentation) => self.doc_issues += 1,
        }
    }

    /// Adds another tally into this one (multi-repository aggregation).
    pub fn merge(&mut self, other: &ParticipantCounts) {
        self.feat_bug_prs += other.feat_bug_prs;
        self.doc_prs += other.doc_prs;
        self.feat_bug_issues += other.feat_bug_issues;
        self.doc_issues += other.doc_issues;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_routes_each_kind_and_category() {
        let mut counts = ParticipantCounts::default();
        counts.record(ItemKind::PullRequest, Category::Feature);
        counts.record(ItemKind::PullRequest, Category::Bug);
        counts.record(ItemKind::PullRequest, Category::Documentation);
        counts.record(ItemKind::Issue, Category::Bug);
        counts.record(ItemKind::Issue, Category::Documentation);
        assert_eq!(counts, ParticipantCounts::new(2, 1, 1, 1));
    }

    #[test]
    fn merge_sums_field_by_field() {
        let mut a = ParticipantCounts::new(1, 2, 3, 4);
        a.merge(&ParticipantCounts::new(4, 3, 2, 1));
        assert_eq!(a, ParticipantCounts::new(5, 5, 5, 5));
    }
}
