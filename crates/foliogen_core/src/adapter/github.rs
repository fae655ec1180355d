//! Repository-hosting import adapter.
//!
//! # Responsibility
//! - Fetch a user's public repositories and shape them into project drafts
//!   the store can append.
//! - Surface any failure as a single error value, never partial results.
//!
//! # Invariants
//! - One-shot semantics: no retry, no backoff.
//! - The adapter never touches a store; calling code feeds the returned
//!   drafts into `add_project`.

use crate::model::entity::ProjectDraft;
use log::debug;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Public GitHub REST endpoint used by the default adapter.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Imported repositories carry no screenshot of their own, so every draft
/// gets this stock image until the owner replaces it in the edit view.
pub const IMPORT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1609921212029-bb5a28e60960?w=800&auto=format&fit=crop";

const NO_DESCRIPTION_FALLBACK: &str = "No description available";
const IMPORT_PER_PAGE: u8 = 6;
const IMPORT_SORT: &str = "updated";
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub type ImportResult<T> = Result<T, ImportError>;

/// Errors from one import attempt.
#[derive(Debug)]
pub enum ImportError {
    /// Username was empty after trimming.
    EmptyUsername,
    /// Transport-level failure (connect, timeout, body decode).
    Transport(reqwest::Error),
    /// The API answered with a non-success status (rate limit, unknown
    /// user, ...).
    Status(u16),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::Transport(err) => write!(f, "repository import failed: {err}"),
            Self::Status(code) => write!(f, "repository host returned status {code}"),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::EmptyUsername | Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for ImportError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Seam views and tests program against.
///
/// Implementations fetch externally-hosted project records for a
/// username-like string and return them fully shaped, or one error value.
pub trait ProjectImportSource {
    fn fetch_projects(&self, username: &str) -> ImportResult<Vec<ProjectDraft>>;
}

/// Wire shape of one repository record as returned by the GitHub API.
///
/// Only the fields the import consumes are modeled; everything else in the
/// response body is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubRepoRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
}

/// Shapes raw repository records into store-ready project drafts.
///
/// # Contract
/// - Output order equals input order (the API already sorts by last
///   update).
/// - A missing description becomes a fixed fallback line.
/// - Every draft gets the placeholder image.
pub fn drafts_from_records(records: Vec<GithubRepoRecord>) -> Vec<ProjectDraft> {
    records
        .into_iter()
        .map(|record| ProjectDraft {
            title: record.name,
            description: record
                .description
                .unwrap_or_else(|| NO_DESCRIPTION_FALLBACK.to_string()),
            image: IMPORT_PLACEHOLDER_IMAGE.to_string(),
            github_link: record.html_url,
        })
        .collect()
}

/// Blocking GitHub implementation of [`ProjectImportSource`].
pub struct GithubImportAdapter {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl GithubImportAdapter {
    /// Creates an adapter against the public GitHub API.
    pub fn new() -> ImportResult<Self> {
        Self::with_api_base(GITHUB_API_BASE)
    }

    /// Creates an adapter against a caller-provided API base URL.
    ///
    /// Tests point this at a local stub server.
    pub fn with_api_base(api_base: impl Into<String>) -> ImportResult<Self> {
        // GitHub rejects requests without a User-Agent header.
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("foliogen/", env!("CARGO_PKG_VERSION")))
            .timeout(HTTP_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.into(),
        })
    }
}

impl ProjectImportSource for GithubImportAdapter {
    fn fetch_projects(&self, username: &str) -> ImportResult<Vec<ProjectDraft>> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ImportError::EmptyUsername);
        }

        let url = format!(
            "{}/users/{username}/repos?sort={IMPORT_SORT}&per_page={IMPORT_PER_PAGE}",
            self.api_base
        );
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            debug!(
                "event=github_fetch module=adapter status=rejected http_status={}",
                status.as_u16()
            );
            return Err(ImportError::Status(status.as_u16()));
        }

        let records: Vec<GithubRepoRecord> = response.json()?;
        debug!(
            "event=github_fetch module=adapter status=ok count={}",
            records.len()
        );
        Ok(drafts_from_records(records))
    }
}
