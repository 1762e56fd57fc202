//! Domain model for the browsable topic catalog.
//!
//! # Responsibility
//! - Define the canonical topic record read from storage.
//! - Define the immutable in-memory forest built from those records.
//!
//! # Invariants
//! - Every topic is identified by a stable integer `TopicId`.
//! - A forest is only ever constructed fully validated or not at all.

pub mod forest;
pub mod topic;
