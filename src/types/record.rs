/// Contribution category a GitHub label maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Feature,
    Bug,
    Documentation,
}

impl Category {
    /// Maps a GitHub label name to a category. Labels outside the scored
    /// set (e.g. `question`, `duplicate`) map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "feature" | "enhancement" => Some(Category::Feature),
            "bug" => Some(Category::Bug),
            "doc" | "documentation" => Some(Category::Documentation),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Feature => "feature",
            Category::Bug => "bug",
            Category::Documentation => "documentation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    PullRequest,
    Issue,
}

impl ItemKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pull_request" | "pr" => Some(ItemKind::PullRequest),
            "issue" => Some(ItemKind::Issue),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::PullRequest => "pull_request",
            ItemKind::Issue => "issue",
        }
    }
}

/// Lifecycle state of the GitHub item at collection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    Merged,
    Open,
    Resolved,
    Closed,
}

impl ItemState {
    /// Whether an item in this state earns credit for the given kind.
    /// PRs count only once merged; issues count while open or when
    /// resolved as completed, never when closed as not planned.
    pub fn qualifies(self, kind: ItemKind) -> bool {
        match kind {
            ItemKind::PullRequest => matches!(self, ItemState::Merged),
            ItemKind::Issue => matches!(self, ItemState::Open | ItemState::Resolved),
        }
    }
}

/// One labeled GitHub item attributed to a participant.
///
/// Category and kind are carried as raw strings; the counter, not the
/// producer, validates them against the scored vocabulary.
#[derive(Debug, Clone)]
pub struct ContributionRecord {
    pub author: String,
    pub category: String,
    pub kind: String,
    pub state: ItemState,
}

impl ContributionRecord {
    pub fn new(
        author: impl Into<String>,
        category: Category,
        kind: ItemKind,
        state: ItemState,
    ) -> Self {
        Self {
            author: author.into(),
            category: category.as_str().to_string(),
            kind: kind.as_str().to_string(),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_mapping_covers_scored_labels() {
        assert_eq!(Category::from_label("enhancement"), Some(Category::Feature));
        assert_eq!(Category::from_label("feature"), Some(Category::Feature));
        assert_eq!(Category::from_label("bug"), Some(Category::Bug));
        assert_eq!(
            Category::from_label("documentation"),
            Some(Category::Documentation)
        );
        assert_eq!(Category::from_label("question"), None);
    }

    #[test]
    fn merged_is_the_only_qualifying_pr_state() {
        assert!(ItemState::Merged.qualifies(ItemKind::PullRequest));
        assert!(!ItemState::Open.qualifies(ItemKind::PullRequest));
        assert!(!ItemState::Closed.qualifies(ItemKind::PullRequest));
    }

    #[test]
    fn not_planned_issues_do_not_qualify() {
        assert!(ItemState::Open.qualifies(ItemKind::Issue));
        assert!(ItemState::Resolved.qualifies(ItemKind::Issue));
        assert!(!ItemState::Closed.qualifies(ItemKind::Issue));
    }
}
