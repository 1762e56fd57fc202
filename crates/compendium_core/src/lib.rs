//! Core domain logic for the Compendium topic viewer.
//! This crate is the single source of truth for catalog invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::forest::{Forest, ForestBuildError, TopicNode};
pub use model::topic::{TopicId, TopicRecord};
pub use repo::topic_repo::{
    SqliteTopicRepository, TopicRepoError, TopicRepoResult, TopicRepository,
};
pub use search::filter::{filter_forest, VisibleSet};
pub use service::catalog_service::{load_forest, CatalogService, LoadError};
pub use service::detail_service::{topic_detail, DetailError, DetailView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
