//! Repository-import application service.
//!
//! # Responsibility
//! - Mediate between an import source and the store: fetch first, then
//!   append every returned draft.
//!
//! # Invariants
//! - A failed fetch leaves the document unchanged; imports never partially
//!   apply.
//! - The store never learns about the adapter; this service is the only
//!   glue between them.

use crate::adapter::github::{ImportError, ImportResult, ProjectImportSource};
use crate::ident::IdGenerator;
use crate::store::portfolio_store::PortfolioStore;
use log::info;

/// Use-case wrapper feeding import results into store mutations.
pub struct ImportService<S: ProjectImportSource> {
    source: S,
}

impl<S: ProjectImportSource> ImportService<S> {
    /// Creates a service using the provided import source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Imports every project the source returns for `username`.
    ///
    /// # Contract
    /// - An empty (or whitespace-only) username is rejected before any
    ///   fetch.
    /// - The full record list is fetched before the first `add_project`
    ///   call, so a failing source cannot leave a half-applied import.
    /// - Drafts are appended in source order.
    ///
    /// Returns the number of projects added.
    pub fn import_projects<G: IdGenerator>(
        &self,
        store: &mut PortfolioStore<G>,
        username: &str,
    ) -> ImportResult<usize> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ImportError::EmptyUsername);
        }

        let drafts = self.source.fetch_projects(username)?;
        let count = drafts.len();
        for draft in drafts {
            store.add_project(draft);
        }

        info!("event=github_import module=service status=ok username={username} count={count}");
        Ok(count)
    }
}
