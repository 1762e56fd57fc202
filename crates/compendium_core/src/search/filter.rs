//! Substring tree filter preserving ancestor context.
//!
//! # Responsibility
//! - Mark topics visible when they match the query or shelter a matching
//!   descendant, so the tree always shows the path to every hit.
//!
//! # Invariants
//! - One post-order pass per call; linear in the number of topics even as
//!   the query grows character by character.
//! - Visible order is the forest's preorder; filtering never reorders.
//! - Blank queries make every topic visible and record no direct matches.

use crate::model::forest::Forest;
use crate::model::topic::TopicId;
use std::collections::HashSet;

/// Topics that remain visible for one query, in presentation order.
///
/// A plain value handed to the presentation layer; recomputed wholesale on
/// every query change.
#[derive(Debug, Clone, Default)]
pub struct VisibleSet {
    order: Vec<TopicId>,
    visible: HashSet<TopicId>,
    matched: HashSet<TopicId>,
}

impl VisibleSet {
    /// Returns whether the topic stays visible.
    pub fn contains(&self, id: TopicId) -> bool {
        self.visible.contains(&id)
    }

    /// Returns whether the topic's own name matched the query directly.
    ///
    /// Shells use this to auto-expand hit rows, as opposed to ancestors that
    /// are only shown for context.
    pub fn is_match(&self, id: TopicId) -> bool {
        self.matched.contains(&id)
    }

    /// Visible topic ids in forest preorder.
    pub fn iter(&self) -> impl Iterator<Item = TopicId> + '_ {
        self.order.iter().copied()
    }

    /// Number of visible topics.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Computes the visible subset of `forest` for `query`.
///
/// A topic matches when `query` is a case-insensitive substring of its
/// name; descriptions are not searched. A topic is visible when it matches,
/// when any descendant matches, or unconditionally for blank queries.
pub fn filter_forest(forest: &Forest, query: &str) -> VisibleSet {
    let needle = query.trim().to_lowercase();

    let mut result = VisibleSet::default();
    if needle.is_empty() {
        result.order = forest.preorder();
        result.visible = result.order.iter().copied().collect();
        return result;
    }

    for &root in forest.roots() {
        mark_visible(forest, root, &needle, &mut result);
    }

    // Preorder pass restricted to visible nodes keeps presentation order
    // identical to the unfiltered tree.
    result.order = forest
        .preorder()
        .into_iter()
        .filter(|id| result.visible.contains(id))
        .collect();

    result
}

/// Post-order walk; returns whether the subtree rooted at `id` has a match.
fn mark_visible(forest: &Forest, id: TopicId, needle: &str, result: &mut VisibleSet) -> bool {
    let Some(node) = forest.get(id) else {
        return false;
    };

    let mut subtree_has_match = false;
    for &child in &node.children {
        subtree_has_match |= mark_visible(forest, child, needle, result);
    }

    let matches = node.name().to_lowercase().contains(needle);
    if matches {
        result.matched.insert(id);
    }

    if matches || subtree_has_match {
        result.visible.insert(id);
        return true;
    }
    false
}
