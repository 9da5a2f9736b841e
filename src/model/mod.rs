//! Application model - the complete state of an outline
//!
//! This module contains the state types following the Elm Architecture pattern.
//! The document is the source of truth; host surfaces mirror it.

pub mod document;
pub mod registry;
pub mod row;

pub use document::{Document, DocumentError, Placement, RowOptions};
pub use registry::RowRegistry;
pub use row::{Row, RowId, CHECKBOX_MARKER};

use std::collections::HashMap;

use crate::config::OutlineConfig;
use crate::keys::Modifiers;

/// The complete outline model
#[derive(Debug, Clone)]
pub struct OutlineModel {
    pub document: Document,
    /// Most recent intentional caret offset per row, restored after a reorder
    pub last_caret: HashMap<RowId, usize>,
    /// Modifier that turns vertical arrows into reorder gestures
    pub reorder_modifier: Modifiers,
}

impl OutlineModel {
    /// Model over an existing document
    pub fn new(document: Document, config: &OutlineConfig) -> Self {
        Self {
            document,
            last_caret: HashMap::new(),
            reorder_modifier: config.reorder_modifier(),
        }
    }

    /// Model for a content container: one row per item, or a single empty
    /// row when the container starts empty. The first row holds focus, so
    /// editing starts at the top rather than wherever mounting left it.
    pub fn from_contents<I, S>(contents: I, config: &OutlineConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut document = Document::with_rows(contents);
        if document.is_empty() {
            document = Document::with_rows([""]);
        }
        if let Some(first) = document.rows().first().map(Row::id) {
            document.focus(first);
        }
        Self::new(document, config)
    }

    pub fn focused_row(&self) -> Option<&Row> {
        self.document.focused_row()
    }

    /// Last intentional caret offset recorded for `row` (0 if none yet)
    pub fn last_caret(&self, row: RowId) -> usize {
        self.last_caret.get(&row).copied().unwrap_or(0)
    }

    pub fn track_caret(&mut self, row: RowId, offset: usize) {
        self.last_caret.insert(row, offset);
    }
}

impl Default for OutlineModel {
    fn default() -> Self {
        Self::from_contents(std::iter::empty::<String>(), &OutlineConfig::default())
    }
}
