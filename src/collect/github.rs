use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ReposcoreError, Result};
use crate::types::record::{Category, ContributionRecord, ItemKind, ItemState};

const API_ROOT: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;

/// Collects labeled PR/issue records for one repository through the GitHub
/// REST issues endpoint (PRs are issues with a `pull_request` field, so one
/// paginated listing covers both).
pub struct GithubCollector {
    client: Client,
    repo: String,
}

#[derive(Debug, Deserialize)]
struct IssueItem {
    user: Option<Actor>,
    #[serde(default)]
    labels: Vec<Label>,
    state: String,
    state_reason: Option<String>,
    pull_request: Option<PullRequestRef>,
}

#[derive(Debug, Deserialize)]
struct Actor {
    login: String,
}

#[derive(Debug, Deserialize)]
struct Label {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PullRequestRef {
    merged_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Debug, Deserialize)]
struct RateLimitResources {
    core: RateLimitPool,
}

#[derive(Debug, Deserialize)]
pub struct RateLimitPool {
    pub limit: u64,
    pub remaining: u64,
}

fn build_client(token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("reposcore"));
    if let Some(token) = token {
        let value =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| ReposcoreError::Api {
                status: 0,
                message: "token contains characters not allowed in a header".to_string(),
            })?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(Client::builder().default_headers(headers).build()?)
}

impl GithubCollector {
    pub fn new(repo: &str, token: Option<&str>) -> Result<Self> {
        Ok(Self {
            client: build_client(token)?,
            repo: repo.to_string(),
        })
    }

    /// Fetches every page of the issues listing and converts qualifying
    /// items into contribution records: merged PRs, and issues that are
    /// open, reopened, or completed (not-planned issues are dropped).
    pub fn collect(&self) -> Result<Vec<ContributionRecord>> {
        let mut records = Vec::new();
        let mut page = 1u32;
        loop {
            let url = format!("{API_ROOT}/repos/{}/issues", self.repo);
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("state", "all".to_string()),
                    ("per_page", PER_PAGE.to_string()),
                    ("page", page.to_string()),
                ])
                .send()?;

            let status = response.status();
            if !status.is_success() {
                return Err(api_error(status.as_u16(), &self.repo));
            }

            let has_next = response
                .headers()
                .get("link")
                .and_then(|value| value.to_str().ok())
                .map(|link| link.contains("rel=\"next\""))
                .unwrap_or(false);

            let items: Vec<IssueItem> = response.json()?;
            if items.is_empty() {
                break;
            }
            debug!(page, count = items.len(), repo = %self.repo, "fetched issues page");
            for item in &items {
                records.extend(item_records(item));
            }

            if has_next {
                page += 1;
            } else {
                break;
            }
        }
        info!(repo = %self.repo, records = records.len(), "collection finished");
        Ok(records)
    }
}

/// Reads the core rate-limit pool for the given credentials.
pub fn rate_limit(token: Option<&str>) -> Result<RateLimitPool> {
    let client = build_client(token)?;
    let response = client.get(format!("{API_ROOT}/rate_limit")).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(api_error(status.as_u16(), "rate_limit"));
    }
    let body: RateLimitResponse = response.json()?;
    Ok(body.resources.core)
}

fn api_error(status: u16, context: &str) -> ReposcoreError {
    let message = match status {
        401 => "authentication failed; check the token value".to_string(),
        403 => "rate limit reached; unauthenticated requests allow only 60 per hour, \
                pass --token to raise the limit"
            .to_string(),
        404 => format!("repository '{context}' not found"),
        422 => "unprocessable request; the endpoint rejected the query".to_string(),
        500 | 503 => "GitHub is unavailable, try again later".to_string(),
        _ => format!("unexpected response for '{context}'"),
    };
    ReposcoreError::Api { status, message }
}

/// Converts one listing item into zero or more records, one per scored
/// label. Unmerged PRs and not-planned issues produce nothing; labels
/// outside the scored set are not the collector's to judge and are skipped
/// here because GitHub, not the participant, assigns the taxonomy.
fn item_records(item: &IssueItem) -> Vec<ContributionRecord> {
    let author = item
        .user
        .as_ref()
        .map(|actor| actor.login.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let (kind, state) = match &item.pull_request {
        Some(pr) => {
            if pr.merged_at.is_none() {
                return Vec::new();
            }
            (ItemKind::PullRequest, ItemState::Merged)
        }
        None => match (item.state.as_str(), item.state_reason.as_deref()) {
            (_, Some("not_planned")) => return Vec::new(),
            (_, Some("completed")) => (ItemKind::Issue, ItemState::Resolved),
            ("open", _) | (_, Some("reopened")) => (ItemKind::Issue, ItemState::Open),
            _ => (ItemKind::Issue, ItemState::Open),
        },
    };

    item.labels
        .iter()
        .filter_map(|label| label.name.as_deref())
        .filter_map(Category::from_label)
        .map(|category| ContributionRecord::new(author.clone(), category, kind, state))
        .collect()
}
