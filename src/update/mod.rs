//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. `update` returns
//! `Some(cmd)` when it handled the message and the host must suppress its
//! default behavior, `None` otherwise.

mod gesture;
mod row;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::OutlineModel;

#[cfg(debug_assertions)]
use crate::tracing::DocumentSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use gesture::update_key;
pub use row::{focus_row, sync_focused, toggle_checked};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut OutlineModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut OutlineModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Key {
            stroke,
            text,
            caret,
        } => gesture::update_key(model, stroke, text, caret),
        Msg::Synced {
            text,
            caret,
            track_caret,
        } => row::sync_focused(model, text, caret, track_caret),
        Msg::ToggleChecked(id) => row::toggle_checked(model, id),
        Msg::Focus(id) => row::focus_row(model, id),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after document state and logs diffs for debugging.
/// Sync messages fire after every typed character, so they are not logged.
#[cfg(debug_assertions)]
fn update_traced(model: &mut OutlineModel, msg: Msg) -> Option<Cmd> {
    let is_noisy = matches!(&msg, Msg::Synced { .. });

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = DocumentSnapshot::from_model(model);
    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = DocumentSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "document", %diff, "state changed");
    }

    model.document.assert_invariants();

    result
}

/// Get a display name for a message
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Key { stroke, caret, .. } => format!("Key({}, caret={})", stroke, caret),
        Msg::Synced { caret, .. } => format!("Synced(caret={})", caret),
        Msg::ToggleChecked(id) => format!("ToggleChecked({})", id),
        Msg::Focus(id) => format!("Focus({})", id),
    }
}
