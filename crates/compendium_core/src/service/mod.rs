//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository reads into load/reload and detail use cases.
//! - Keep UI shells decoupled from storage and validation details.

pub mod catalog_service;
pub mod detail_service;
