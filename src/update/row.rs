//! Row messages that are not keyboard gestures

use crate::commands::Cmd;
use crate::model::{OutlineModel, RowId};
use crate::util::char_len;

/// Mirror the host surface after it applied a default editing action
pub fn sync_focused(
    model: &mut OutlineModel,
    text: String,
    caret: usize,
    track_caret: bool,
) -> Option<Cmd> {
    let id = model.document.focused()?;
    let caret = caret.min(char_len(&text));
    if let Some(row) = model.document.row_mut(id) {
        if row.text() != text {
            row.set_text(text);
        }
    }
    if track_caret {
        model.track_caret(id, caret);
    }
    None
}

/// Checkbox click: flip the checked state of a checklist row
pub fn toggle_checked(model: &mut OutlineModel, id: RowId) -> Option<Cmd> {
    let checked = model.document.row_mut(id)?.toggle_checked()?;
    tracing::debug!(target: "gesture", row = %id, checked, "checkbox toggled");
    Some(Cmd::ShowCheckbox { row: id, checked })
}

/// Pointer focus change reported by the host
pub fn focus_row(model: &mut OutlineModel, id: RowId) -> Option<Cmd> {
    if !model.document.focus(id) {
        tracing::warn!(target: "gesture", row = %id, "focus on unknown row ignored");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutlineConfig;

    #[test]
    fn test_sync_updates_text_and_caret() {
        let mut m = OutlineModel::from_contents(["ab"], &OutlineConfig::default());
        let id = m.document.focused().unwrap();
        assert!(sync_focused(&mut m, "abc".to_string(), 3, true).is_none());
        assert_eq!(m.document.row(id).unwrap().text(), "abc");
        assert_eq!(m.last_caret(id), 3);

        sync_focused(&mut m, "abc".to_string(), 1, false);
        assert_eq!(m.last_caret(id), 3);
    }

    #[test]
    fn test_toggle_plain_row_is_noop() {
        let mut m = OutlineModel::from_contents(["ab"], &OutlineConfig::default());
        let id = m.document.focused().unwrap();
        assert!(toggle_checked(&mut m, id).is_none());
    }

    #[test]
    fn test_focus_unknown_row_keeps_focus() {
        let mut m = OutlineModel::from_contents(["a", "b"], &OutlineConfig::default());
        let first = m.document.focused();
        focus_row(&mut m, RowId(999));
        assert_eq!(m.document.focused(), first);
    }
}
