use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ReposcoreError, Result};
use crate::types::counts::ParticipantCounts;

/// Cached participant tallies for one repository, pre-aggregated so a rerun
/// can score without touching the API.
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheFile {
    pub update_time: DateTime<Utc>,
    pub participants: HashMap<String, ParticipantCounts>,
}

impl CacheFile {
    pub fn new(participants: HashMap<String, ParticipantCounts>) -> Self {
        Self {
            update_time: Utc::now(),
            participants,
        }
    }
}

/// Cache file path for a repository, e.g. `results/cache_owner_repo.json`.
pub fn cache_path(output: &Path, repo: &str) -> PathBuf {
    output.join(format!("cache_{}.json", repo.replace('/', "_")))
}

pub fn load(path: &Path) -> Result<CacheFile> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ReposcoreError::Cache(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| ReposcoreError::Cache(format!("{}: {}", path.display(), e)))
}

pub fn store(path: &Path, cache: &CacheFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(cache)?)?;
    info!(path = %path.display(), "cache written");
    Ok(())
}
