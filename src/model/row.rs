//! Row model - one editable line of the outline, optionally carrying a checkbox

use serde::Serialize;

use crate::util::split_at_char;

/// The two-character marker that turns a plain row into a checklist row
pub const CHECKBOX_MARKER: &str = "[]";

/// Unique identifier for a row, stable across reordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RowId(pub u64);

impl std::fmt::Display for RowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

/// A single row: a text buffer plus an optional checkbox.
///
/// Rows live inside a [`Document`](super::Document); code outside the
/// document holds a [`RowId`]. A row handed back by `Document::remove` is
/// marked deleted and must not be mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    id: RowId,
    text: String,
    has_checkbox: bool,
    checked: bool,
    #[serde(skip)]
    deleted: bool,
}

impl Row {
    pub(crate) fn new(id: RowId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            has_checkbox: false,
            checked: false,
            deleted: false,
        }
    }

    /// A row that starts life with its checkbox already present.
    /// `text` is kept verbatim, no marker is expected or stripped.
    pub(crate) fn with_checkbox(id: RowId, text: impl Into<String>) -> Self {
        Self {
            has_checkbox: true,
            ..Self::new(id, text)
        }
    }

    pub fn id(&self) -> RowId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_checkbox(&self) -> bool {
        self.has_checkbox
    }

    /// Checkbox state; always false for rows without a checkbox
    pub fn is_checked(&self) -> bool {
        self.has_checkbox && self.checked
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// True when the text begins with [`CHECKBOX_MARKER`]
    pub fn starts_with_marker(&self) -> bool {
        self.text.starts_with(CHECKBOX_MARKER)
    }

    /// Split the text at a char offset into `(before, after)`. Does not mutate.
    pub fn split_at(&self, offset: usize) -> (String, String) {
        let (before, after) = split_at_char(&self.text, offset);
        (before.to_string(), after.to_string())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if !self.guard_live("set_text") {
            return;
        }
        self.text = text.into();
    }

    /// Concatenate `s` onto the end of the text
    pub fn append_text(&mut self, s: &str) {
        if !self.guard_live("append_text") {
            return;
        }
        self.text.push_str(s);
    }

    /// Turn the leading `[]` marker into a checkbox.
    ///
    /// Strips exactly the two marker characters. Returns false and leaves the
    /// row untouched when the marker is absent or a checkbox already exists.
    pub fn create_checkbox(&mut self) -> bool {
        if !self.guard_live("create_checkbox") {
            return false;
        }
        if self.has_checkbox || !self.starts_with_marker() {
            return false;
        }
        self.text.drain(..CHECKBOX_MARKER.len());
        self.has_checkbox = true;
        self.checked = false;
        true
    }

    /// Remove the checkbox, keeping the text. Returns false if there was none.
    pub fn delete_checkbox(&mut self) -> bool {
        if !self.guard_live("delete_checkbox") {
            return false;
        }
        if !self.has_checkbox {
            return false;
        }
        self.has_checkbox = false;
        self.checked = false;
        true
    }

    /// Set the checkbox state. Returns false if the row has no checkbox.
    pub fn set_checked(&mut self, checked: bool) -> bool {
        if !self.guard_live("set_checked") {
            return false;
        }
        if !self.has_checkbox {
            return false;
        }
        self.checked = checked;
        true
    }

    /// Flip the checkbox, returning the new state (None without a checkbox)
    pub fn toggle_checked(&mut self) -> Option<bool> {
        let next = !self.checked;
        self.set_checked(next).then_some(next)
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Mutating a deleted row is a sequencing defect, not a runtime condition
    fn guard_live(&self, op: &str) -> bool {
        debug_assert!(!self.deleted, "{} called on deleted row {}", op, self.id);
        if self.deleted {
            tracing::error!(
                target: "document",
                row = %self.id,
                op,
                "mutation of deleted row ignored"
            );
        }
        !self.deleted
    }
}
