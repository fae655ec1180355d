//! View-boundary validation helpers.
//!
//! # Responsibility
//! - Provide the required-field and shape checks forms run before calling
//!   store mutations, so every caller validates identically.
//!
//! # Invariants
//! - The store itself never validates and never fails; everything here is
//!   for callers.
//! - Checks treat whitespace-only input as empty.

use crate::model::document::PortfolioDocument;
use crate::model::entity::{ProjectDraft, SkillDraft, SocialLinkDraft};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid url regex"));

/// Input rejection reported to the user before any store call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required free-text field is empty or whitespace-only.
    MissingField(&'static str),
    /// Publishing requires at least one project.
    NoProjects,
    /// Value does not look like an email address.
    InvalidEmail(String),
    /// Value is not an absolute http(s) URL.
    InvalidUrl(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::NoProjects => write!(f, "at least one project is required"),
            Self::InvalidEmail(value) => write!(f, "invalid email address: `{value}`"),
            Self::InvalidUrl(value) => write!(f, "invalid http(s) url: `{value}`"),
        }
    }
}

impl Error for ValidationError {}

/// Rejects empty or whitespace-only values for a named required field.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(())
}

/// Returns whether `value` has a plausible email shape.
///
/// Intentionally permissive: the document never rejects addresses, this
/// only backs form-side feedback.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Returns whether `value` is an absolute http(s) URL.
pub fn is_valid_http_url(value: &str) -> bool {
    HTTP_URL_RE.is_match(value.trim())
}

/// Publish gate for the edit view.
///
/// # Contract
/// - Display name and short bio must be non-empty.
/// - At least one project must exist.
pub fn validate_publish(document: &PortfolioDocument) -> Result<(), ValidationError> {
    require_non_empty("name", &document.name)?;
    require_non_empty("short bio", &document.short_bio)?;
    if document.projects.is_empty() {
        return Err(ValidationError::NoProjects);
    }
    Ok(())
}

/// Checks a project draft before `add_project`.
pub fn validate_project_draft(draft: &ProjectDraft) -> Result<(), ValidationError> {
    require_non_empty("project title", &draft.title)?;
    require_non_empty("project description", &draft.description)?;
    Ok(())
}

/// Checks a skill draft before `add_skill`.
pub fn validate_skill_draft(draft: &SkillDraft) -> Result<(), ValidationError> {
    require_non_empty("skill name", &draft.name)
}

/// Checks a social-link draft before `add_social_media`.
pub fn validate_social_link_draft(draft: &SocialLinkDraft) -> Result<(), ValidationError> {
    require_non_empty("social link name", &draft.name)?;
    require_non_empty("social link url", &draft.url)?;
    if !is_valid_http_url(&draft.url) {
        return Err(ValidationError::InvalidUrl(draft.url.clone()));
    }
    Ok(())
}
