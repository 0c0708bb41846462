pub mod cache;
pub mod github;

use std::collections::HashMap;
use std::path::Path;

use crate::error::{ReposcoreError, Result};
use crate::types::counts::ParticipantCounts;

/// Validates the 'owner/repo' shape: exactly one slash, both parts made of
/// alphanumerics, '-' or '_'.
pub fn validate_repo_format(repo: &str) -> Result<()> {
    let valid = match repo.split_once('/') {
        Some((owner, name)) => {
            let part_ok = |part: &str| {
                !part.is_empty()
                    && part
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            };
            part_ok(owner) && part_ok(name)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ReposcoreError::InvalidRepoFormat(repo.to_string()))
    }
}

/// Splits the positional repository arguments on commas and drops
/// duplicates while preserving first-seen order.
pub fn normalize_repo_args(args: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for arg in args {
        for part in arg.split(',') {
            let repo = part.trim();
            if !repo.is_empty() && !seen.iter().any(|existing| existing == repo) {
                seen.push(repo.to_string());
            }
        }
    }
    seen
}

/// Loads a `--user-info` file: a JSON object mapping GitHub logins to
/// display names.
pub fn load_user_info(path: &Path) -> Result<HashMap<String, String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ReposcoreError::UserInfo(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| ReposcoreError::UserInfo(format!("{}: not a valid JSON object: {}", path.display(), e)))
}

/// Renames tally keys according to the user-info aliases. A login absent
/// from the aliases keeps its own name; collisions merge the tallies.
pub fn apply_aliases(
    counts: HashMap<String, ParticipantCounts>,
    aliases: &HashMap<String, String>,
) -> HashMap<String, ParticipantCounts> {
    let mut renamed: HashMap<String, ParticipantCounts> = HashMap::new();
    for (login, tally) in counts {
        let name = aliases.get(&login).cloned().unwrap_or(login);
        renamed.entry(name).or_default().merge(&tally);
    }
    renamed
}
