//! Document ownership and mutation boundary.
//!
//! # Responsibility
//! - Hold the single live portfolio document behind its mutation contract.
//! - Keep ordering and id-uniqueness rules inside one boundary.
//!
//! # Invariants
//! - No code outside this module mutates a [`PortfolioDocument`](crate::model::document::PortfolioDocument)
//!   that a store owns.

pub mod portfolio_store;
