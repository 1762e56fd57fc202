//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the read contract the loader consumes.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository reads never mutate the source.
//! - Row decoding rejects invalid persisted state instead of masking it.

pub mod topic_repo;
