//! Core domain logic for Foliogen.
//! This crate is the single source of truth for portfolio-document invariants.

pub mod adapter;
pub mod ident;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use adapter::contact::{
    ContactSubmission, FormTarget, GoogleFormAdapter, SubmissionError, SubmissionSink,
};
pub use adapter::github::{
    drafts_from_records, GithubImportAdapter, GithubRepoRecord, ImportError, ImportResult,
    ProjectImportSource, GITHUB_API_BASE, IMPORT_PLACEHOLDER_IMAGE,
};
pub use ident::{EntityId, IdGenerator, UuidIdGenerator};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{PortfolioDocument, ProfilePatch};
pub use model::entity::{
    Project, ProjectDraft, ProjectPatch, Skill, SkillDraft, SocialLink, SocialLinkDraft,
    SocialLinkPatch,
};
pub use model::validate::{
    validate_project_draft, validate_publish, validate_skill_draft, validate_social_link_draft,
    ValidationError,
};
pub use service::import_service::ImportService;
pub use store::portfolio_store::PortfolioStore;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
