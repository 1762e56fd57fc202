//! Catalog load/reload use-case service.
//!
//! # Responsibility
//! - Turn a topic repository into a validated, immutable [`Forest`].
//! - Enforce the atomic replace-or-reject policy across reloads.
//!
//! # Invariants
//! - A failed load leaves the previously published forest untouched.
//! - The new forest becomes observable only after full validation.

use crate::model::forest::{Forest, ForestBuildError};
use crate::model::topic::TopicId;
use crate::repo::topic_repo::{TopicRepoError, TopicRepository};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Errors from catalog load operations.
#[derive(Debug)]
pub enum LoadError {
    /// The data source could not be read at all.
    SourceUnreadable(TopicRepoError),
    /// Two rows share one topic id.
    DuplicateId(TopicId),
    /// A row references a parent id that does not exist.
    MissingParent { id: TopicId, parent_id: TopicId },
    /// The parent relation contains a cycle.
    Cycle { id: TopicId },
    /// A row's display name is blank.
    BlankName { id: TopicId },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceUnreadable(err) => write!(f, "topic source unreadable: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate topic id: {id}"),
            Self::MissingParent { id, parent_id } => {
                write!(f, "topic {id} references missing parent {parent_id}")
            }
            Self::Cycle { id } => write!(f, "topic hierarchy contains a cycle at {id}"),
            Self::BlankName { id } => write!(f, "topic {id} has a blank name"),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SourceUnreadable(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TopicRepoError> for LoadError {
    fn from(value: TopicRepoError) -> Self {
        Self::SourceUnreadable(value)
    }
}

impl From<ForestBuildError> for LoadError {
    fn from(value: ForestBuildError) -> Self {
        match value {
            ForestBuildError::DuplicateId(id) => Self::DuplicateId(id),
            ForestBuildError::MissingParent { id, parent_id } => {
                Self::MissingParent { id, parent_id }
            }
            ForestBuildError::Cycle { id } => Self::Cycle { id },
            ForestBuildError::BlankName { id } => Self::BlankName { id },
        }
    }
}

/// Loads all rows from `repo` and materializes a validated forest.
///
/// Stateless entry point; [`CatalogService`] adds the replace-or-reject
/// lifecycle on top.
pub fn load_forest<R: TopicRepository>(repo: &R) -> Result<Forest, LoadError> {
    let started_at = Instant::now();
    info!("event=forest_load module=service status=start");

    let records = match repo.fetch_all() {
        Ok(records) => records,
        Err(err) => {
            error!(
                "event=forest_load module=service status=error duration_ms={} error_code=source_unreadable error={err}",
                started_at.elapsed().as_millis()
            );
            return Err(err.into());
        }
    };

    match Forest::from_records(records) {
        Ok(forest) => {
            info!(
                "event=forest_load module=service status=ok duration_ms={} topics={}",
                started_at.elapsed().as_millis(),
                forest.len()
            );
            Ok(forest)
        }
        Err(err) => {
            error!(
                "event=forest_load module=service status=error duration_ms={} error_code=invalid_structure error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err.into())
        }
    }
}

/// Catalog facade owning the currently published forest.
///
/// The shell asks it to reload on startup and after every import; a bad
/// import never disturbs what is already on screen.
pub struct CatalogService<R: TopicRepository> {
    repo: R,
    forest: Option<Forest>,
}

impl<R: TopicRepository> CatalogService<R> {
    /// Creates a service with no forest published yet.
    pub fn new(repo: R) -> Self {
        Self { repo, forest: None }
    }

    /// Returns the currently published forest, if any load has succeeded.
    pub fn forest(&self) -> Option<&Forest> {
        self.forest.as_ref()
    }

    /// Loads from the repository and publishes the result.
    ///
    /// On error the previously published forest stays in place, so callers
    /// can keep rendering it while reporting the failure.
    pub fn reload(&mut self) -> Result<&Forest, LoadError> {
        let fresh = load_forest(&self.repo)?;
        Ok(self.forest.insert(fresh))
    }
}
