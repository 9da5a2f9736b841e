//! Command types for the Elm-style architecture
//!
//! Commands represent side effects on the host presentation that should be
//! performed after an update. `update` never touches the host itself.

use crate::model::RowId;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Replace the text shown by a row's surface
    SetText { row: RowId, text: String },
    /// Create a surface for a new row at `index` in document order
    MountRow {
        row: RowId,
        index: usize,
        text: String,
        checkbox: bool,
    },
    /// Drop the surface of a removed row
    UnmountRow(RowId),
    /// Move a row's surface to `index` in document order
    MoveRow { row: RowId, index: usize },
    /// Show (or refresh) the checkbox control of a row
    ShowCheckbox { row: RowId, checked: bool },
    /// Hide the checkbox control of a row
    HideCheckbox(RowId),
    /// Focus a row, leaving caret placement to the host
    Focus(RowId),
    /// Focus a row and place a collapsed caret
    SetCaret { row: RowId, offset: usize },
    /// Execute multiple commands, in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Flatten nested batches into execution order, dropping `None`
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
