//! Host presentation seam
//!
//! The host owns the real editing surfaces (one per row) and the checkbox
//! controls. The core consumes it only through these traits: the caret
//! adapter talks to a [`Surface`], the runtime executes commands against a
//! [`Host`].

mod memory;

pub use memory::{MemoryHost, MemorySurface};

use std::borrow::Cow;

use crate::caret::Selection;
use crate::keys::Keystroke;
use crate::model::RowId;

/// An editable single-row text region
pub trait Surface {
    /// Current text content
    fn text(&self) -> Cow<'_, str>;

    /// Replace the whole text content
    fn set_text(&mut self, text: &str);

    /// Give input focus to this surface
    fn focus(&mut self);

    fn is_focused(&self) -> bool;

    /// Active selection within this surface, in character offsets
    fn selection(&self) -> Option<Selection>;

    /// Replace every existing range with `selection`
    fn select(&mut self, selection: Selection);
}

/// The presentation layer mirroring the document
pub trait Host {
    type Surface: Surface;

    fn surface(&self, row: RowId) -> Option<&Self::Surface>;

    fn surface_mut(&mut self, row: RowId) -> Option<&mut Self::Surface>;

    /// Create a surface for `row` at `index` in document order
    fn mount(&mut self, row: RowId, index: usize, text: &str);

    fn unmount(&mut self, row: RowId);

    /// Move the surface of `row` to `index` in document order
    fn move_to(&mut self, row: RowId, index: usize);

    /// Focus `row`'s surface, blurring every other one
    fn focus(&mut self, row: RowId);

    fn show_checkbox(&mut self, row: RowId, checked: bool);

    fn hide_checkbox(&mut self, row: RowId);

    /// Apply the host's own editing behavior for a key the core did not handle
    fn default_action(&mut self, row: RowId, stroke: &Keystroke);
}
