/// Allocation result for one participant: the counted contributions per
/// category after ratio capping, and the final score. Derived once by the
/// allocator and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreResult {
    /// Counted feature/bug pull requests.
    pub feat_bug_prs: u64,
    /// Counted documentation pull requests.
    pub doc_prs: u64,
    /// Counted feature/bug issues.
    pub feat_bug_issues: u64,
    /// Counted documentation issues.
    pub doc_issues: u64,
    pub score: u64,
}
