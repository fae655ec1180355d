//! Entity identifier generation.
//!
//! # Responsibility
//! - Produce opaque, process-unique identifiers for created entities.
//! - Keep id generation behind a seam so tests can substitute a
//!   deterministic implementation.
//!
//! # Invariants
//! - No two `next_id()` calls within one process return equal values.
//! - Generated ordering carries no meaning; ids are never used for sorting.

use uuid::Uuid;

/// Stable opaque identifier for every portfolio entity.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = Uuid;

/// Source of fresh entity identifiers.
///
/// The store assigns ids through this seam only; callers never mint ids
/// themselves.
pub trait IdGenerator {
    /// Returns a fresh identifier, distinct from every prior call.
    fn next_id(&self) -> EntityId;
}

/// Default generator backed by random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> EntityId {
        Uuid::new_v4()
    }
}
