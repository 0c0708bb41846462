use crate::types::counts::ParticipantCounts;
use crate::types::score::ScoreResult;

/// Points per counted feature/bug pull request.
pub const FEAT_BUG_PR_WEIGHT: u64 = 3;
/// Points per counted documentation pull request.
pub const DOC_PR_WEIGHT: u64 = 2;
/// Points per counted feature/bug issue.
pub const FEAT_BUG_ISSUE_WEIGHT: u64 = 2;
/// Points per counted documentation issue.
pub const DOC_ISSUE_WEIGHT: u64 = 1;

/// Documentation PRs count up to this multiple of feature/bug PRs.
pub const DOC_PR_RATIO: u64 = 3;
/// Total issues count up to this multiple of the valid PR count.
pub const ISSUE_RATIO: u64 = 4;

/// Converts one participant's raw tally into counted contributions and a
/// final score.
///
/// Documentation PRs are capped at `DOC_PR_RATIO` times the feature/bug PR
/// count, so doc-PR farming without functional work earns nothing. Total
/// issue credit is capped at `ISSUE_RATIO` times the valid PR count, coupling
/// issue score to demonstrated PR activity. Within each kind, feature/bug
/// contributions fill the counted total before documentation ones, so
/// higher-value work is never displaced by lower-value work.
pub fn allocate(counts: &ParticipantCounts) -> ScoreResult {
    let p_fb = counts.feat_bug_prs;
    let p_d = counts.doc_prs;
    let i_fb = counts.feat_bug_issues;
    let i_d = counts.doc_issues;

    let p_valid = p_fb + p_d.min(DOC_PR_RATIO * p_fb);
    let i_valid = (i_fb + i_d).min(ISSUE_RATIO * p_valid);

    let p_fb_at = p_fb.min(p_valid);
    let p_d_at = p_valid - p_fb_at;

    let i_fb_at = i_fb.min(i_valid);
    let i_d_at = i_valid - i_fb_at;

    let score = FEAT_BUG_PR_WEIGHT * p_fb_at
        + DOC_PR_WEIGHT * p_d_at
        + FEAT_BUG_ISSUE_WEIGHT * i_fb_at
        + DOC_ISSUE_WEIGHT * i_d_at;

    ScoreResult {
        feat_bug_prs: p_fb_at,
        doc_prs: p_d_at,
        feat_bug_issues: i_fb_at,
        doc_issues: i_d_at,
        score,
    }
}
