//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::keys::Keystroke;
use crate::model::RowId;

/// Vertical direction through the row list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Input to [`update`](crate::update::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Key-down on the focused row, before the host's default action.
    /// `text` and `caret` are what the host surface reports at that moment.
    Key {
        stroke: Keystroke,
        text: String,
        caret: usize,
    },
    /// The host applied its default action for an unhandled key; mirror the
    /// result. `track_caret` is false for vertical arrows.
    Synced {
        text: String,
        caret: usize,
        track_caret: bool,
    },
    /// The checkbox of a row was clicked
    ToggleChecked(RowId),
    /// The host moved focus to a row (pointer click)
    Focus(RowId),
}

impl Msg {
    /// Convenience constructor for a key event
    pub fn key(stroke: Keystroke, text: impl Into<String>, caret: usize) -> Self {
        Msg::Key {
            stroke,
            text: text.into(),
            caret,
        }
    }
}
