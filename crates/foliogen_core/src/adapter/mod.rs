//! External-I/O boundaries consumed by views.
//!
//! # Responsibility
//! - Define the import and submission seams plus their default blocking
//!   HTTP implementations.
//!
//! # Invariants
//! - Adapters never call the store; calling code reads their output and
//!   routes it through store mutations.
//! - Every failure surfaces as one error value; there are no partial
//!   results.

pub mod contact;
pub mod github;
