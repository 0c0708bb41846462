use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReposcoreError {
    #[error("invalid repository format: '{0}' (expected owner/repo)")]
    InvalidRepoFormat(String),

    #[error("invalid contribution record: {0}")]
    InvalidRecord(String),

    #[error("unknown participant: {0}")]
    MissingParticipant(String),

    #[error("github api request failed ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("cache file error: {0}")]
    Cache(String),

    #[error("user info file error: {0}")]
    UserInfo(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReposcoreError>;
