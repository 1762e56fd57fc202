//! Detail pane mapping for a selected topic.
//!
//! # Responsibility
//! - Turn a selected topic id into renderable name and paragraph data.
//! - Escape markup-significant characters before text leaves the core.
//!
//! # Invariants
//! - Description content can never reach the shell as raw markup.
//! - A stale id maps to `TopicNotFound`, which shells treat as "clear the
//!   pane", not as a user-facing error.

use crate::model::forest::Forest;
use crate::model::topic::TopicId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PARAGRAPH_BREAK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("valid paragraph break regex"));

const EMPTY_DESCRIPTION_HTML: &str = "<p>No description available.</p>";

/// Errors from detail mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailError {
    /// The id does not exist in the forest, e.g. a selection kept across a
    /// reload.
    TopicNotFound(TopicId),
}

impl Display for DetailError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopicNotFound(id) => write!(f, "topic not found: {id}"),
        }
    }
}

impl Error for DetailError {}

/// Renderable detail content for one topic.
///
/// Plain serializable data; the shell owns fonts, layout and widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    /// Id of the topic this view was built from.
    pub topic_id: TopicId,
    /// Display name, unescaped (shells render it as plain text).
    pub name: String,
    /// Description paragraphs in order, each already HTML-escaped.
    pub paragraphs: Vec<String>,
}

impl DetailView {
    /// Returns whether the description carried any renderable text.
    pub fn has_content(&self) -> bool {
        !self.paragraphs.is_empty()
    }

    /// Renders the paragraphs as a block of `<p>` elements.
    ///
    /// Falls back to a fixed placeholder when the description is empty, so
    /// a text-browser shell always has something to show.
    pub fn to_html(&self) -> String {
        if self.paragraphs.is_empty() {
            return EMPTY_DESCRIPTION_HTML.to_string();
        }
        self.paragraphs
            .iter()
            .map(|paragraph| format!("<p>{paragraph}</p>"))
            .collect()
    }
}

/// Maps a selected topic id to its detail view.
///
/// Splits the description on newline boundaries, trims each paragraph,
/// drops blank ones, and escapes `&`, `<` and `>` so the content can never
/// be interpreted as structural markup downstream.
pub fn topic_detail(forest: &Forest, id: TopicId) -> Result<DetailView, DetailError> {
    let node = forest.get(id).ok_or(DetailError::TopicNotFound(id))?;

    let paragraphs = PARAGRAPH_BREAK_RE
        .split(&node.record.description)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| html_escape::encode_text(paragraph).into_owned())
        .collect();

    Ok(DetailView {
        topic_id: id,
        name: node.name().to_string(),
        paragraphs,
    })
}
