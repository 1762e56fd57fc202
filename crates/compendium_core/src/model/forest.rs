//! Immutable topic forest built from flat parent/child rows.
//!
//! # Responsibility
//! - Materialize `TopicRecord` rows into an arena of linked nodes.
//! - Validate referential structure before any node becomes reachable.
//!
//! # Invariants
//! - Every `parent_id` in a constructed forest resolves to a known node.
//! - The parent relation is acyclic.
//! - Sibling order is the row delivery order and is never mutated afterwards.
//! - A forest is never partially built: construction returns the whole
//!   validated forest or an error and nothing else.

use crate::model::topic::{TopicId, TopicRecord};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Structural validation failure while materializing a forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForestBuildError {
    /// Two rows share one id. Cannot happen through the SQLite repository
    /// (PRIMARY KEY), but directly supplied records are checked too.
    DuplicateId(TopicId),
    /// A row references a parent id that no row defines.
    MissingParent { id: TopicId, parent_id: TopicId },
    /// A row is its own ancestor through the parent relation.
    Cycle { id: TopicId },
    /// A row's display name is empty or whitespace-only.
    BlankName { id: TopicId },
}

impl Display for ForestBuildError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate topic id: {id}"),
            Self::MissingParent { id, parent_id } => {
                write!(f, "topic {id} references missing parent {parent_id}")
            }
            Self::Cycle { id } => write!(f, "topic {id} is its own ancestor"),
            Self::BlankName { id } => write!(f, "topic {id} has a blank name"),
        }
    }
}

impl Error for ForestBuildError {}

/// One materialized topic inside a [`Forest`].
///
/// Children are owned by position in the parent's child list; `parent` is a
/// lookup relation only and never drives lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicNode {
    /// The source row this node wraps.
    pub record: TopicRecord,
    /// Parent topic id, `None` for roots. Mirrors `record.parent_id`.
    pub parent: Option<TopicId>,
    /// Child ids in sibling order.
    pub children: Vec<TopicId>,
}

impl TopicNode {
    /// Returns the topic id.
    pub fn id(&self) -> TopicId {
        self.record.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

/// Validated, immutable arena of topic nodes plus an id index.
///
/// Built once per load and replaced wholesale on reload; no in-place
/// editing is supported.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: HashMap<TopicId, TopicNode>,
    roots: Vec<TopicId>,
}

impl Forest {
    /// Materializes and validates a forest from flat rows.
    ///
    /// Rows may arrive in any order; two passes build nodes first and link
    /// children second, so a child row may precede its parent row. Sibling
    /// order follows the order rows were delivered in.
    ///
    /// # Errors
    /// - [`ForestBuildError::DuplicateId`] when two rows share an id.
    /// - [`ForestBuildError::BlankName`] when a name is whitespace-only.
    /// - [`ForestBuildError::MissingParent`] when a parent id is unknown.
    /// - [`ForestBuildError::Cycle`] when the parent relation loops.
    pub fn from_records(records: Vec<TopicRecord>) -> Result<Self, ForestBuildError> {
        let mut nodes: HashMap<TopicId, TopicNode> = HashMap::with_capacity(records.len());
        let mut order: Vec<TopicId> = Vec::with_capacity(records.len());

        for record in records {
            if !record.has_usable_name() {
                return Err(ForestBuildError::BlankName { id: record.id });
            }
            let id = record.id;
            let parent = record.parent_id;
            let previous = nodes.insert(
                id,
                TopicNode {
                    record,
                    parent,
                    children: Vec::new(),
                },
            );
            if previous.is_some() {
                return Err(ForestBuildError::DuplicateId(id));
            }
            order.push(id);
        }

        let mut roots = Vec::new();
        for &id in &order {
            let parent = nodes[&id].parent;
            match parent {
                None => roots.push(id),
                Some(parent_id) => {
                    if !nodes.contains_key(&parent_id) {
                        return Err(ForestBuildError::MissingParent { id, parent_id });
                    }
                    if let Some(parent) = nodes.get_mut(&parent_id) {
                        parent.children.push(id);
                    }
                }
            }
        }

        detect_cycles(&nodes, &order)?;

        Ok(Self { nodes, roots })
    }

    /// Returns root topic ids in delivery order.
    pub fn roots(&self) -> &[TopicId] {
        &self.roots
    }

    /// Looks up one node by id.
    pub fn get(&self, id: TopicId) -> Option<&TopicNode> {
        self.nodes.get(&id)
    }

    /// Returns whether the id exists in this forest.
    pub fn contains(&self, id: TopicId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the number of topics.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the forest holds no topics.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns all topic ids in depth-first preorder.
    ///
    /// Roots keep their delivery order and children their sibling order, so
    /// this is the canonical presentation order of the tree.
    pub fn preorder(&self) -> Vec<TopicId> {
        let mut ordered = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<TopicId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            ordered.push(id);
            if let Some(node) = self.nodes.get(&id) {
                stack.extend(node.children.iter().rev());
            }
        }
        ordered
    }
}

/// Three-color walk over parent links.
///
/// Every node is visited once across all walks, so validation stays linear
/// in the number of topics.
fn detect_cycles(
    nodes: &HashMap<TopicId, TopicNode>,
    order: &[TopicId],
) -> Result<(), ForestBuildError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        InProgress,
        Done,
    }

    let mut marks: HashMap<TopicId, Mark> = HashMap::with_capacity(nodes.len());

    for &start in order {
        if marks.contains_key(&start) {
            continue;
        }

        let mut trail = Vec::new();
        let mut cursor = Some(start);
        while let Some(id) = cursor {
            match marks.get(&id) {
                Some(Mark::Done) => break,
                Some(Mark::InProgress) => return Err(ForestBuildError::Cycle { id }),
                None => {
                    marks.insert(id, Mark::InProgress);
                    trail.push(id);
                    cursor = nodes[&id].parent;
                }
            }
        }

        for id in trail {
            marks.insert(id, Mark::Done);
        }
    }

    Ok(())
}
