//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate adapter output into store mutations at use-case level.
//! - Keep view layers decoupled from adapter wiring.

pub mod import_service;
