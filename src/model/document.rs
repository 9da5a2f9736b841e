//! Document model - the ordered sequence of rows and which one holds focus

use super::registry::RowRegistry;
use super::row::{Row, RowId};
use crate::messages::Direction;

/// Where a newly created row goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Appended inside the container, after every existing row
    #[default]
    Append,
    /// Spliced in as the sibling immediately after an anchor row
    After(RowId),
}

/// Construction options for a new row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowOptions {
    /// Start with the checkbox already present
    pub with_checkbox: bool,
    pub placement: Placement,
    /// Initial text, kept verbatim
    pub content: String,
}

impl RowOptions {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn checkbox(mut self) -> Self {
        self.with_checkbox = true;
        self
    }

    pub fn after(mut self, anchor: RowId) -> Self {
        self.placement = Placement::After(anchor);
        self
    }
}

/// Errors from structural document operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The anchor row is not (or no longer) part of the document
    AnchorNotFound(RowId),
    /// A removed row cannot be inserted again
    RowDeleted(RowId),
    /// A row with this id is already in the document
    AlreadyPresent(RowId),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::AnchorNotFound(id) => write!(f, "Anchor {} is not in the document", id),
            DocumentError::RowDeleted(id) => write!(f, "Row {} was deleted", id),
            DocumentError::AlreadyPresent(id) => write!(f, "Row {} in document already", id),
        }
    }
}

impl std::error::Error for DocumentError {}

/// The row list. Vector order is document order, top to bottom.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rows: Vec<Row>,
    focus: Option<RowId>,
    next_row_id: u64,
    registry: RowRegistry,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self {
            next_row_id: 1,
            ..Self::default()
        }
    }

    /// Create a document with one plain row per item, focusing the last one
    pub fn with_rows<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut doc = Self::new();
        for content in contents {
            let row = doc.new_row(false, content);
            doc.rows.push(row);
        }
        doc.focus = doc.rows.last().map(Row::id);
        doc
    }

    // === Queries ===

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id() == id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn row_mut(&mut self, id: RowId) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    /// Adjacent row in `direction`, None at a boundary or for an unknown id
    pub fn neighbor(&self, id: RowId, direction: Direction) -> Option<&Row> {
        let idx = self.index_of(id)?;
        match direction {
            Direction::Up => idx.checked_sub(1).and_then(|i| self.rows.get(i)),
            Direction::Down => self.rows.get(idx + 1),
        }
    }

    pub fn registry(&self) -> &RowRegistry {
        &self.registry
    }

    // === Focus ===

    pub fn focused(&self) -> Option<RowId> {
        self.focus
    }

    pub fn focused_row(&self) -> Option<&Row> {
        self.focus.and_then(|id| self.row(id))
    }

    /// Move focus to `id`. Returns false (focus unchanged) for unknown rows.
    pub fn focus(&mut self, id: RowId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.focus = Some(id);
        true
    }

    // === Construction ===

    /// Allocate a detached row and record it in the registry
    pub fn new_row(&mut self, with_checkbox: bool, content: impl Into<String>) -> Row {
        let id = RowId(self.next_row_id.max(1));
        self.next_row_id = id.0 + 1;
        self.registry.record(id);
        if with_checkbox {
            Row::with_checkbox(id, content)
        } else {
            Row::new(id, content)
        }
    }

    /// Create a row from options and place it. Focus moves to the new row.
    pub fn create_row(&mut self, opts: RowOptions) -> Result<RowId, DocumentError> {
        if let Placement::After(anchor) = opts.placement {
            if !self.contains(anchor) {
                return Err(DocumentError::AnchorNotFound(anchor));
            }
        }
        let row = self.new_row(opts.with_checkbox, opts.content);
        match opts.placement {
            Placement::Append => self.append(row),
            Placement::After(anchor) => self.insert_after(anchor, row),
        }
    }

    /// Append `row` at the bottom. Focus moves to it.
    pub fn append(&mut self, row: Row) -> Result<RowId, DocumentError> {
        self.check_insertable(&row)?;
        let id = row.id();
        self.rows.push(row);
        self.focus = Some(id);
        Ok(id)
    }

    /// Insert `row` immediately after `anchor`. Focus moves to the new row.
    pub fn insert_after(&mut self, anchor: RowId, row: Row) -> Result<RowId, DocumentError> {
        self.check_insertable(&row)?;
        let idx = self
            .index_of(anchor)
            .ok_or(DocumentError::AnchorNotFound(anchor))?;
        let id = row.id();
        self.rows.insert(idx + 1, row);
        self.focus = Some(id);
        tracing::debug!(target: "document", %anchor, row = %id, "row inserted");
        Ok(id)
    }

    fn check_insertable(&self, row: &Row) -> Result<(), DocumentError> {
        if row.is_deleted() {
            return Err(DocumentError::RowDeleted(row.id()));
        }
        if self.contains(row.id()) {
            return Err(DocumentError::AlreadyPresent(row.id()));
        }
        Ok(())
    }

    // === Mutation ===

    /// Remove `id`, first appending its text to `fold_into` when given.
    ///
    /// The removed row is returned marked deleted. Caret placement is left to
    /// the caller; focus is cleared if it pointed at the removed row.
    /// Unknown ids are a no-op, and so is a `fold_into` that is missing or
    /// equal to `id`: the row's text must always land somewhere.
    pub fn remove(&mut self, id: RowId, fold_into: Option<RowId>) -> Option<Row> {
        let idx = self.index_of(id)?;
        if let Some(target) = fold_into {
            if target == id || !self.contains(target) {
                tracing::warn!(
                    target: "document",
                    row = %id,
                    %target,
                    "invalid fold target, row kept"
                );
                return None;
            }
        }

        let mut row = self.rows.remove(idx);
        if let Some(survivor) = fold_into.and_then(|target| self.row_mut(target)) {
            survivor.append_text(row.text());
        }

        row.mark_deleted();
        if self.focus == Some(id) {
            self.focus = None;
        }
        tracing::debug!(target: "document", row = %id, rows = self.rows.len(), "row removed");
        Some(row)
    }

    /// Swap `id` with its previous sibling. No-op (false) at the top.
    pub fn move_up(&mut self, id: RowId) -> bool {
        match self.index_of(id) {
            Some(idx) if idx > 0 => {
                self.rows.swap(idx, idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Swap `id` with its next sibling. No-op (false) at the bottom.
    pub fn move_down(&mut self, id: RowId) -> bool {
        match self.index_of(id) {
            Some(idx) if idx + 1 < self.rows.len() => {
                self.rows.swap(idx, idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Assert row-list invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        for (i, row) in self.rows.iter().enumerate() {
            debug_assert!(!row.is_deleted(), "Row {} in document is deleted", row.id());
            debug_assert!(
                self.rows[i + 1..].iter().all(|r| r.id() != row.id()),
                "Row {} appears twice",
                row.id()
            );
        }
        if let Some(focus) = self.focus {
            debug_assert!(self.contains(focus), "Focused {} is not in document", focus);
        }
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
