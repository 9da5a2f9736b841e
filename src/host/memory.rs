//! In-memory host: single-line surfaces kept in a vector in document order

use std::borrow::Cow;

use super::{Host, Surface};
use crate::caret::{get_caret, Selection};
use crate::keys::{KeyCode, Keystroke};
use crate::model::RowId;
use crate::util::{char_len, insert_char_at, remove_chars};

/// A single-line editable surface backed by a `String`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    text: String,
    selection: Option<Selection>,
    focused: bool,
}

impl MemorySurface {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Default single-line editing for an unhandled key
    pub fn apply_key(&mut self, stroke: &Keystroke) {
        let caret = get_caret(self);
        let start = self
            .selection
            .map(|s| s.start().min(caret))
            .unwrap_or(caret);
        let len = char_len(&self.text);

        if let Some(ch) = stroke.printable() {
            remove_chars(&mut self.text, start, caret);
            insert_char_at(&mut self.text, start, ch);
            self.select(Selection::collapsed(start + 1));
            return;
        }

        let next = match stroke.key {
            KeyCode::Backspace if start < caret => {
                remove_chars(&mut self.text, start, caret);
                start
            }
            KeyCode::Backspace if caret > 0 => {
                remove_chars(&mut self.text, caret - 1, caret);
                caret - 1
            }
            KeyCode::Delete if start < caret => {
                remove_chars(&mut self.text, start, caret);
                start
            }
            KeyCode::Delete => {
                remove_chars(&mut self.text, caret, caret + 1);
                caret
            }
            KeyCode::Left if start < caret => start,
            KeyCode::Left => caret.saturating_sub(1),
            KeyCode::Right => (caret + 1).min(len),
            KeyCode::Home => 0,
            KeyCode::End => len,
            // Enter, Tab, Escape and vertical arrows do nothing on one line
            _ => return,
        };
        self.select(Selection::collapsed(next));
    }
}

impl Surface for MemorySurface {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn selection(&self) -> Option<Selection> {
        self.selection
    }

    fn select(&mut self, selection: Selection) {
        self.selection = Some(selection);
    }
}

#[derive(Debug, Clone)]
struct MountedRow {
    id: RowId,
    surface: MemorySurface,
    checkbox: Option<bool>,
}

/// Reference host used by the binary and the tests
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    rows: Vec<MountedRow>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row ids in presentation order
    pub fn order(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    /// Surface texts in presentation order
    pub fn texts(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.surface.text.clone()).collect()
    }

    /// Checkbox state shown for `row`: None when hidden or unknown
    pub fn checkbox(&self, row: RowId) -> Option<bool> {
        self.find(row).and_then(|i| self.rows[i].checkbox)
    }

    /// The row whose surface holds focus
    pub fn focused(&self) -> Option<RowId> {
        self.rows
            .iter()
            .find(|r| r.surface.is_focused())
            .map(|r| r.id)
    }

    /// Render the outline, one line per row
    pub fn render(&self, checked_glyph: &str, unchecked_glyph: &str) -> String {
        self.rows
            .iter()
            .map(|r| match r.checkbox {
                Some(true) => format!("{} {}", checked_glyph, r.surface.text),
                Some(false) => format!("{} {}", unchecked_glyph, r.surface.text),
                None => r.surface.text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn find(&self, row: RowId) -> Option<usize> {
        self.rows.iter().position(|r| r.id == row)
    }
}

impl Host for MemoryHost {
    type Surface = MemorySurface;

    fn surface(&self, row: RowId) -> Option<&MemorySurface> {
        self.find(row).map(|i| &self.rows[i].surface)
    }

    fn surface_mut(&mut self, row: RowId) -> Option<&mut MemorySurface> {
        let idx = self.find(row)?;
        Some(&mut self.rows[idx].surface)
    }

    fn mount(&mut self, row: RowId, index: usize, text: &str) {
        if self.find(row).is_some() {
            tracing::warn!(target: "host", %row, "row already mounted");
            return;
        }
        let index = index.min(self.rows.len());
        self.rows.insert(
            index,
            MountedRow {
                id: row,
                surface: MemorySurface::with_text(text),
                checkbox: None,
            },
        );
    }

    fn unmount(&mut self, row: RowId) {
        if let Some(idx) = self.find(row) {
            self.rows.remove(idx);
        }
    }

    fn move_to(&mut self, row: RowId, index: usize) {
        if let Some(idx) = self.find(row) {
            let mounted = self.rows.remove(idx);
            let index = index.min(self.rows.len());
            self.rows.insert(index, mounted);
        }
    }

    fn focus(&mut self, row: RowId) {
        for mounted in &mut self.rows {
            if mounted.id == row {
                mounted.surface.focus();
            } else {
                mounted.surface.blur();
            }
        }
    }

    fn show_checkbox(&mut self, row: RowId, checked: bool) {
        if let Some(idx) = self.find(row) {
            self.rows[idx].checkbox = Some(checked);
        }
    }

    fn hide_checkbox(&mut self, row: RowId) {
        if let Some(idx) = self.find(row) {
            self.rows[idx].checkbox = None;
        }
    }

    fn default_action(&mut self, row: RowId, stroke: &Keystroke) {
        if let Some(surface) = self.surface_mut(row) {
            surface.apply_key(stroke);
        }
    }
}
