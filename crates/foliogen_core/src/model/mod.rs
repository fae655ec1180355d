//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the document aggregate and its entity records.
//! - Define the draft/patch input shapes accepted by store mutations.
//! - Host the validation helpers forms run at the view boundary.
//!
//! # Invariants
//! - Every entity is identified by a stable [`EntityId`](crate::ident::EntityId).
//! - Model types carry no behavior beyond construction and patch merging;
//!   ordering and uniqueness are enforced by the store.

pub mod document;
pub mod entity;
pub mod validate;
