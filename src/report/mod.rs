pub mod chart;
pub mod csv;
pub mod text;

use std::path::{Path, PathBuf};

use crate::engine::allocator::{
    DOC_ISSUE_WEIGHT, DOC_PR_WEIGHT, FEAT_BUG_ISSUE_WEIGHT, FEAT_BUG_PR_WEIGHT,
};
use crate::engine::Scoreboard;
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Text,
    Chart,
    Both,
}

impl OutputFormat {
    fn includes_table(self) -> bool {
        matches!(self, OutputFormat::Table | OutputFormat::Both)
    }

    fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    fn includes_chart(self) -> bool {
        matches!(self, OutputFormat::Chart | OutputFormat::Both)
    }
}

/// One reportable line: weighted points per category plus the share of the
/// repository-wide score, in ranking order.
#[derive(Debug, Clone)]
pub struct ScoreRow {
    pub name: String,
    pub feat_bug_pr_points: u64,
    pub doc_pr_points: u64,
    pub feat_bug_issue_points: u64,
    pub doc_issue_points: u64,
    pub total: u64,
    /// Percentage of the total score across all participants.
    pub rate: f64,
}

/// Builds report rows from a scoreboard, dropping participants below
/// `min_score`. The rate is relative to the unfiltered total so hidden
/// participants still weigh in.
pub fn score_rows(board: &Scoreboard, min_score: u64) -> Vec<ScoreRow> {
    let sum = board.total_score();
    board
        .ranking()
        .into_iter()
        .filter(|(_, result)| result.score >= min_score)
        .map(|(name, result)| ScoreRow {
            name: name.to_string(),
            feat_bug_pr_points: FEAT_BUG_PR_WEIGHT * result.feat_bug_prs,
            doc_pr_points: DOC_PR_WEIGHT * result.doc_prs,
            feat_bug_issue_points: FEAT_BUG_ISSUE_WEIGHT * result.feat_bug_issues,
            doc_issue_points: DOC_ISSUE_WEIGHT * result.doc_issues,
            total: result.score,
            rate: if sum > 0 {
                result.score as f64 / sum as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Writes the selected result files into `dir` and returns their paths.
pub fn write_all(
    board: &Scoreboard,
    dir: &Path,
    format: OutputFormat,
    min_score: u64,
) -> Result<Vec<PathBuf>> {
    let rows = score_rows(board, min_score);
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    if format.includes_table() {
        let path = dir.join("score.csv");
        std::fs::write(&path, csv::to_csv(&rows))?;
        written.push(path);
    }
    if format.includes_text() {
        let path = dir.join("score.txt");
        std::fs::write(&path, text::to_text(&rows))?;
        written.push(path);
    }
    if format.includes_chart() {
        let path = dir.join("chart.txt");
        std::fs::write(&path, chart::to_chart(&rows))?;
        written.push(path);
    }
    Ok(written)
}
