//! Arrow navigation and row reordering tests

mod common;

use checkline::caret::Selection;
use checkline::host::{Host, MemoryHost, Surface};
use checkline::model::RowId;
use checkline::{Outline, OutlineConfig};
use common::{assert_mirrored, focused_index, press, row_id, test_outline_at, texts};

fn order(outline: &Outline<MemoryHost>) -> Vec<RowId> {
    outline.rows().iter().map(|r| r.id()).collect()
}

// ========================================================================
// Plain arrows move focus
// ========================================================================

#[test]
fn test_down_and_up_move_focus() {
    let mut outline = test_outline_at(&["a", "b", "c"], 0, 0);

    assert!(press(&mut outline, "down"));
    assert_eq!(focused_index(&outline), Some(1));
    assert!(press(&mut outline, "down"));
    assert_eq!(focused_index(&outline), Some(2));
    assert!(press(&mut outline, "up"));
    assert_eq!(focused_index(&outline), Some(1));
    assert_mirrored(&outline);
}

#[test]
fn test_arrows_at_boundaries_keep_focus() {
    let mut outline = test_outline_at(&["a", "b"], 0, 0);
    assert!(!press(&mut outline, "up"));
    assert_eq!(focused_index(&outline), Some(0));

    press(&mut outline, "down");
    assert!(!press(&mut outline, "down"));
    assert_eq!(focused_index(&outline), Some(1));
    assert_mirrored(&outline);
}

#[test]
fn test_typing_after_focus_move_edits_new_row() {
    let mut outline = test_outline_at(&["a", "b"], 0, 1);
    press(&mut outline, "down");
    press(&mut outline, "end");
    outline.type_text("!");
    assert_eq!(texts(&outline), vec!["a", "b!"]);
    assert_mirrored(&outline);
}

// ========================================================================
// Modified arrows reorder
// ========================================================================

#[test]
fn test_ctrl_up_moves_row_and_keeps_focus() {
    let mut outline = test_outline_at(&["a", "b", "c"], 2, 0);
    let c = row_id(&outline, 2);

    assert!(press(&mut outline, "ctrl+up"));

    assert_eq!(texts(&outline), vec!["a", "c", "b"]);
    assert_eq!(outline.document().focused(), Some(c));
    assert_mirrored(&outline);
}

#[test]
fn test_move_up_then_down_restores_order() {
    let mut outline = test_outline_at(&["a", "b", "c"], 1, 0);
    let original = order(&outline);

    press(&mut outline, "ctrl+up");
    press(&mut outline, "ctrl+down");
    assert_eq!(order(&outline), original);

    press(&mut outline, "ctrl+down");
    press(&mut outline, "ctrl+up");
    assert_eq!(order(&outline), original);
    assert_mirrored(&outline);
}

#[test]
fn test_reorder_at_boundaries_is_noop() {
    let mut outline = test_outline_at(&["a", "b"], 0, 0);
    let original = order(&outline);
    assert!(!press(&mut outline, "ctrl+up"));
    assert_eq!(order(&outline), original);

    let last = row_id(&outline, 1);
    outline.click(last, 0);
    assert!(!press(&mut outline, "ctrl+down"));
    assert_eq!(order(&outline), original);
    assert_mirrored(&outline);
}

#[test]
fn test_reorder_restores_last_tracked_caret() {
    let mut outline = test_outline_at(&["alpha", "gamma"], 1, 2);
    let gamma = row_id(&outline, 1);

    // An intentional caret move is tracked
    press(&mut outline, "right");
    assert_eq!(outline.caret(), Some(3));

    // The host loses the caret position (as a DOM move would)
    outline
        .host_mut()
        .surface_mut(gamma)
        .unwrap()
        .select(Selection::collapsed(0));

    press(&mut outline, "ctrl+up");
    assert_eq!(texts(&outline), vec!["gamma", "alpha"]);
    assert_eq!(outline.caret(), Some(3));
    assert!(outline.host().surface(gamma).unwrap().is_focused());
}

#[test]
fn test_vertical_arrows_do_not_update_tracked_caret() {
    let mut outline = test_outline_at(&["one", "two", "three"], 2, 0);
    let three = row_id(&outline, 2);
    press(&mut outline, "end");

    // Boundary arrow falls back to the host, which does not move the caret
    // on a single line; the tracked offset must stay at the end anyway.
    outline
        .host_mut()
        .surface_mut(three)
        .unwrap()
        .select(Selection::collapsed(1));
    press(&mut outline, "down");

    press(&mut outline, "ctrl+up");
    assert_eq!(outline.caret(), Some(5));
}

#[test]
fn test_split_row_can_be_reordered() {
    let mut outline = test_outline_at(&[""], 0, 0);
    outline.type_text("[] first");
    press(&mut outline, "enter");
    outline.type_text("second");

    press(&mut outline, "ctrl+up");
    assert_eq!(texts(&outline), vec!["second", "first"]);
    assert!(outline.rows().iter().all(|r| r.has_checkbox()));
    assert_eq!(outline.caret(), Some(6));
    assert_mirrored(&outline);
}

// ========================================================================
// Configurable reorder modifier
// ========================================================================

#[test]
fn test_alt_reorder_modifier() {
    let config = OutlineConfig {
        reorder_modifier: "alt".to_string(),
        ..OutlineConfig::default()
    };
    let mut outline = Outline::from_contents(["a", "b"], &config, MemoryHost::new());
    let b = row_id(&outline, 1);
    outline.click(b, 0);

    // Ctrl is now a plain arrow: focus moves, order stays
    press(&mut outline, "ctrl+up");
    assert_eq!(texts(&outline), vec!["a", "b"]);
    assert_eq!(focused_index(&outline), Some(0));

    outline.click(b, 0);
    press(&mut outline, "alt+up");
    assert_eq!(texts(&outline), vec!["b", "a"]);
    assert_mirrored(&outline);
}
