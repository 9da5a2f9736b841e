//! Keyboard gesture interpreter
//!
//! Decides, for one key-down on the focused row, which structural operation
//! applies. Returning `None` hands the key back to the host's default editing.

use tracing::debug;

use crate::commands::Cmd;
use crate::keys::{KeyCode, Keystroke};
use crate::messages::Direction;
use crate::model::{OutlineModel, RowId, CHECKBOX_MARKER};
use crate::util::{char_len, insert_char_at};

/// Handle a key-down on the focused row
pub fn update_key(
    model: &mut OutlineModel,
    stroke: Keystroke,
    text: String,
    caret: usize,
) -> Option<Cmd> {
    let Some(id) = model.document.focused() else {
        debug!(target: "gesture", %stroke, "key with no focused row");
        return None;
    };

    let caret = caret.min(char_len(&text));
    if let Some(row) = model.document.row_mut(id) {
        if row.text() != text {
            row.set_text(text);
        }
    }

    if !stroke.key.is_vertical_arrow() {
        model.track_caret(id, caret);
    }

    match stroke.key {
        KeyCode::Space | KeyCode::Char(' ') if stroke.printable() == Some(' ') => {
            handle_space(model, id, caret)
        }
        KeyCode::Backspace => handle_backspace(model, id, caret),
        KeyCode::Enter => handle_enter(model, id, caret),
        KeyCode::Up | KeyCode::Down => {
            let direction = if stroke.key == KeyCode::Up {
                Direction::Up
            } else {
                Direction::Down
            };
            if stroke.mods.contains(model.reorder_modifier) {
                handle_reorder(model, id, direction)
            } else {
                handle_focus_move(model, id, direction)
            }
        }
        _ => None,
    }
}

/// `[]` followed by a typed space becomes a checkbox.
///
/// The marker is evaluated against the text with the space already in place.
/// The space that commits the marker is consumed along with it when it sits
/// right after `[]`.
fn handle_space(model: &mut OutlineModel, id: RowId, caret: usize) -> Option<Cmd> {
    let row = model.document.row(id)?;
    if row.has_checkbox() {
        return None;
    }

    let mut typed = row.text().to_string();
    insert_char_at(&mut typed, caret, ' ');
    if !typed.starts_with(CHECKBOX_MARKER) {
        return None;
    }

    let marker_len = char_len(CHECKBOX_MARKER);
    let row = model.document.row_mut(id)?;
    row.set_text(typed);
    if !row.create_checkbox() {
        return None;
    }

    let mut new_caret = (caret + 1).saturating_sub(marker_len);
    if caret == marker_len {
        let mut text = row.text().to_string();
        text.remove(0);
        row.set_text(text);
        new_caret = 0;
    }

    let text = row.text().to_string();
    model.track_caret(id, new_caret);
    debug!(target: "gesture", row = %id, %text, "checkbox created");

    Some(Cmd::batch(vec![
        Cmd::SetText { row: id, text },
        Cmd::ShowCheckbox {
            row: id,
            checked: false,
        },
        Cmd::SetCaret {
            row: id,
            offset: new_caret,
        },
    ]))
}

/// Backspace with nothing to delete leftward: drop the checkbox, else merge
/// into the previous row.
fn handle_backspace(model: &mut OutlineModel, id: RowId, caret: usize) -> Option<Cmd> {
    if caret != 0 {
        return None;
    }

    if model.document.row(id)?.has_checkbox() {
        model.document.row_mut(id)?.delete_checkbox();
        debug!(target: "gesture", row = %id, "checkbox removed by backspace");
        return Some(Cmd::HideCheckbox(id));
    }

    // First row without a checkbox: nothing to merge into
    let previous = model.document.neighbor(id, Direction::Up)?;
    let fold_into = previous.id();
    let focus_offset = char_len(previous.text());

    model.document.remove(id, Some(fold_into))?;
    model.document.focus(fold_into);
    model.last_caret.remove(&id);
    model.track_caret(fold_into, focus_offset);

    let merged = model.document.row(fold_into)?.text().to_string();
    debug!(target: "gesture", removed = %id, into = %fold_into, focus_offset, "rows merged");

    Some(Cmd::batch(vec![
        Cmd::UnmountRow(id),
        Cmd::SetText {
            row: fold_into,
            text: merged,
        },
        Cmd::SetCaret {
            row: fold_into,
            offset: focus_offset,
        },
    ]))
}

/// Enter on a checklist row splits it; on an empty checklist row it only
/// drops the checkbox. Plain rows leave Enter to the host.
fn handle_enter(model: &mut OutlineModel, id: RowId, caret: usize) -> Option<Cmd> {
    let row = model.document.row(id)?;
    if !row.has_checkbox() {
        return None;
    }

    if row.text().is_empty() {
        model.document.row_mut(id)?.delete_checkbox();
        debug!(target: "gesture", row = %id, "checkbox removed from empty row");
        return Some(Cmd::HideCheckbox(id));
    }

    let (before, after) = row.split_at(caret);
    model.document.row_mut(id)?.set_text(before.clone());

    let new_row = model.document.new_row(true, after.clone());
    let new_id = match model.document.insert_after(id, new_row) {
        Ok(new_id) => new_id,
        Err(e) => {
            tracing::warn!(target: "gesture", error = %e, "split failed");
            return None;
        }
    };
    let index = model.document.index_of(new_id)?;
    model.track_caret(new_id, 0);
    debug!(target: "gesture", row = %id, new_row = %new_id, caret, "row split");

    Some(Cmd::batch(vec![
        Cmd::SetText {
            row: id,
            text: before,
        },
        Cmd::MountRow {
            row: new_id,
            index,
            text: after,
            checkbox: true,
        },
        Cmd::SetCaret {
            row: new_id,
            offset: 0,
        },
    ]))
}

/// Modified arrow: swap with the neighbor, keep focus, restore the last
/// intentional caret offset.
fn handle_reorder(model: &mut OutlineModel, id: RowId, direction: Direction) -> Option<Cmd> {
    let moved = match direction {
        Direction::Up => model.document.move_up(id),
        Direction::Down => model.document.move_down(id),
    };
    if !moved {
        return None;
    }

    let index = model.document.index_of(id)?;
    let offset = model.last_caret(id);
    debug!(target: "gesture", row = %id, ?direction, index, offset, "row moved");

    Some(Cmd::batch(vec![
        Cmd::MoveRow { row: id, index },
        Cmd::SetCaret { row: id, offset },
    ]))
}

/// Plain arrow: focus the neighbor, host decides where the caret lands
fn handle_focus_move(model: &mut OutlineModel, id: RowId, direction: Direction) -> Option<Cmd> {
    let target = model.document.neighbor(id, direction)?.id();
    model.document.focus(target);
    Some(Cmd::Focus(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutlineConfig;
    use crate::keys::Modifiers;
    use crate::model::Document;

    fn model(rows: &[&str]) -> OutlineModel {
        OutlineModel::from_contents(rows.iter().copied(), &OutlineConfig::default())
    }

    fn key(model: &mut OutlineModel, key: KeyCode, caret: usize) -> Option<Cmd> {
        let text = model.focused_row().map(|r| r.text().to_string()).unwrap();
        update_key(model, Keystroke::key(key), text, caret)
    }

    #[test]
    fn test_space_after_marker_creates_checkbox() {
        let mut m = model(&["[]"]);
        let cmd = key(&mut m, KeyCode::Space, 2).unwrap();
        let row = m.focused_row().unwrap();
        assert!(row.has_checkbox());
        assert_eq!(row.text(), "");
        let id = row.id();
        assert_eq!(
            cmd.into_vec(),
            vec![
                Cmd::SetText {
                    row: id,
                    text: String::new()
                },
                Cmd::ShowCheckbox {
                    row: id,
                    checked: false
                },
                Cmd::SetCaret { row: id, offset: 0 },
            ]
        );
    }

    #[test]
    fn test_shifted_char_space_creates_checkbox() {
        let mut m = model(&["[]"]);
        let stroke = Keystroke::new(KeyCode::Char(' '), Modifiers::SHIFT);
        assert!(update_key(&mut m, stroke, "[]".to_string(), 2).is_some());
        assert!(m.focused_row().unwrap().has_checkbox());

        let mut m = model(&["[]"]);
        let chord = Keystroke::new(KeyCode::Char(' '), Modifiers::CTRL);
        assert!(update_key(&mut m, chord, "[]".to_string(), 2).is_none());
        assert!(!m.focused_row().unwrap().has_checkbox());
    }

    #[test]
    fn test_space_later_in_marked_row_keeps_typed_space() {
        let mut m = model(&["[]abc"]);
        key(&mut m, KeyCode::Space, 5).unwrap();
        let row = m.focused_row().unwrap();
        assert!(row.has_checkbox());
        assert_eq!(row.text(), "abc ");
        assert_eq!(m.last_caret(row.id()), 4);
    }

    #[test]
    fn test_space_without_marker_is_host_default() {
        let mut m = model(&["Buy [] milk"]);
        assert!(key(&mut m, KeyCode::Space, 6).is_none());
        assert!(!m.focused_row().unwrap().has_checkbox());
    }

    #[test]
    fn test_space_on_checkbox_row_is_host_default() {
        let mut m = model(&["[]"]);
        key(&mut m, KeyCode::Space, 2).unwrap();
        // The user types the marker again inside an existing checklist row
        let cmd = update_key(&mut m, Keystroke::key(KeyCode::Space), "[]".to_string(), 2);
        assert!(cmd.is_none());
        assert_eq!(m.focused_row().unwrap().text(), "[]");
    }

    #[test]
    fn test_backspace_mid_row_is_host_default() {
        let mut m = model(&["a", "b"]);
        let second = m.document.rows()[1].id();
        m.document.focus(second);
        assert!(key(&mut m, KeyCode::Backspace, 1).is_none());
        assert_eq!(m.document.len(), 2);
    }

    #[test]
    fn test_backspace_on_first_plain_row_is_noop() {
        let mut m = model(&["a", "b"]);
        assert!(key(&mut m, KeyCode::Backspace, 0).is_none());
        assert_eq!(m.document.len(), 2);
    }

    #[test]
    fn test_enter_on_plain_row_is_host_default() {
        let mut m = model(&["plain"]);
        assert!(key(&mut m, KeyCode::Enter, 2).is_none());
        assert_eq!(m.document.len(), 1);
    }

    #[test]
    fn test_key_without_focus_is_ignored() {
        let mut m = OutlineModel::new(Document::new(), &OutlineConfig::default());
        let cmd = update_key(&mut m, Keystroke::key(KeyCode::Enter), String::new(), 0);
        assert!(cmd.is_none());
    }

    #[test]
    fn test_reorder_restores_last_caret() {
        let mut m = model(&["a", "hello"]);
        let id = m.document.rows()[1].id();
        m.document.focus(id);
        // Typing records the caret
        key(&mut m, KeyCode::Char('x'), 3);
        let stroke = Keystroke::new(KeyCode::Up, Modifiers::CTRL);
        let cmd = update_key(&mut m, stroke, "hello".to_string(), 0).unwrap();
        assert_eq!(
            cmd.into_vec(),
            vec![
                Cmd::MoveRow { row: id, index: 0 },
                Cmd::SetCaret { row: id, offset: 3 },
            ]
        );
        assert_eq!(m.document.focused(), Some(id));
    }

    #[test]
    fn test_reorder_at_top_is_noop() {
        let mut m = model(&["a", "b"]);
        let stroke = Keystroke::new(KeyCode::Up, Modifiers::CTRL);
        assert!(update_key(&mut m, stroke, "a".to_string(), 0).is_none());
        assert_eq!(m.document.rows()[0].text(), "a");
    }

    #[test]
    fn test_mismatched_modifier_is_plain_arrow() {
        let mut m = model(&["a", "b"]);
        let second = m.document.rows()[1].id();
        let stroke = Keystroke::new(KeyCode::Down, Modifiers::ALT);
        let cmd = update_key(&mut m, stroke, "a".to_string(), 0).unwrap();
        assert_eq!(cmd, Cmd::Focus(second));
        assert_eq!(m.document.rows()[0].text(), "a");
    }
}
