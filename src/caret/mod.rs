//! Caret adapter: translates between an abstract character offset and the
//! host surface's native selection.
//!
//! Only collapsed carets are meaningful to the gesture interpreter. When the
//! host reports a range, its end offset is taken as the caret. A surface with
//! no selection reads as offset 0.

mod selection;

pub use selection::Selection;

use crate::host::Surface;
use crate::util::char_len;

/// Current caret offset within `surface`, 0 when it holds no selection.
pub fn get_caret<S: Surface + ?Sized>(surface: &S) -> usize {
    let Some(selection) = surface.selection() else {
        tracing::trace!(target: "caret", "no selection, caret defaults to 0");
        return 0;
    };
    selection.end().min(char_len(&surface.text()))
}

/// Place a collapsed caret `offset` characters into `surface` and focus it.
///
/// Offsets past the end clamp to end-of-content; an empty surface gets 0.
/// The surface's previous selection is replaced wholesale, so no range
/// survives from an earlier call.
pub fn set_caret<S: Surface + ?Sized>(surface: &mut S, offset: usize) -> usize {
    let len = char_len(&surface.text());
    let clamped = offset.min(len);
    if clamped != offset {
        tracing::debug!(target: "caret", offset, len, "caret offset clamped to end");
    }
    surface.select(Selection::collapsed(clamped));
    surface.focus();
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemorySurface;

    #[test]
    fn test_get_caret_without_selection_is_zero() {
        let surface = MemorySurface::with_text("hello");
        assert_eq!(get_caret(&surface), 0);
    }

    #[test]
    fn test_get_caret_uses_range_end() {
        let mut surface = MemorySurface::with_text("hello");
        surface.select(Selection::new(4, 1));
        assert_eq!(get_caret(&surface), 4);
    }

    #[test]
    fn test_get_caret_clamps_stale_selection() {
        let mut surface = MemorySurface::with_text("hello");
        surface.select(Selection::collapsed(5));
        surface.set_text("hi");
        assert_eq!(get_caret(&surface), 2);
    }

    #[test]
    fn test_set_caret_focuses_and_collapses() {
        let mut surface = MemorySurface::with_text("hello");
        surface.select(Selection::new(0, 5));
        assert_eq!(set_caret(&mut surface, 3), 3);
        assert!(surface.is_focused());
        assert_eq!(surface.selection(), Some(Selection::collapsed(3)));
    }

    #[test]
    fn test_set_caret_clamps_to_end() {
        let mut surface = MemorySurface::with_text("héllo");
        assert_eq!(set_caret(&mut surface, 42), 5);
        assert_eq!(get_caret(&surface), 5);

        let mut empty = MemorySurface::default();
        assert_eq!(set_caret(&mut empty, 3), 0);
        assert_eq!(get_caret(&empty), 0);
    }
}
