//! Topic row model.
//!
//! # Responsibility
//! - Define the strictly typed record mirroring one `topics` table row.
//!
//! # Invariants
//! - `id` is stable and never reused for another topic.
//! - `parent_id` is `None` for root topics.

use serde::{Deserialize, Serialize};

/// Stable identifier for a topic, mirroring `topics.id`.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TopicId = i64;

/// One row of the `topics` table, decoded into owned typed fields.
///
/// The repository rejects NULL-where-required and type-mismatched values at
/// the storage boundary, so code holding a `TopicRecord` never deals with
/// loosely typed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// Primary key from storage.
    pub id: TopicId,
    /// Parent topic id. `None` marks a root topic.
    pub parent_id: Option<TopicId>,
    /// Display label shown in the tree. Never blank in a validated forest.
    pub name: String,
    /// Newline-delimited paragraphs. May be empty.
    pub description: String,
}

impl TopicRecord {
    /// Creates a record with the given identity and content.
    pub fn new(
        id: TopicId,
        parent_id: Option<TopicId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            parent_id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Returns whether the display name is usable, i.e. not blank after trim.
    pub fn has_usable_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
