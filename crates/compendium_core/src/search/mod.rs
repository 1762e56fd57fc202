//! Live tree filtering over the materialized forest.
//!
//! # Responsibility
//! - Compute which topics stay visible for a query string.
//!
//! # Invariants
//! - Filtering is a pure function of (forest, query); the forest is never
//!   mutated.

pub mod filter;
