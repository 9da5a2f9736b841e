//! Registry of every row ever created, for external enumeration.
//!
//! The document appends on creation and never reads it back. Collaborators
//! such as exporters borrow it through [`Document::registry`].

use super::document::Document;
use super::row::{Row, RowId};

#[derive(Debug, Clone, Default)]
pub struct RowRegistry {
    created: Vec<RowId>,
}

impl RowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, id: RowId) {
        self.created.push(id);
    }

    /// All row ids in creation order, including rows since removed
    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.created.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    /// Rows still present in `document`, in creation order
    pub fn live<'a>(&'a self, document: &'a Document) -> impl Iterator<Item = &'a Row> + 'a {
        self.created.iter().filter_map(move |id| document.row(*id))
    }
}
