//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use checkline::host::{Host, MemoryHost};
use checkline::keys::parse_key_string;
use checkline::model::{Row, RowId};
use checkline::{Outline, OutlineConfig};

/// Outline over `rows` with the first row focused at caret 0
pub fn test_outline(rows: &[&str]) -> Outline<MemoryHost> {
    Outline::from_contents(
        rows.iter().copied(),
        &OutlineConfig::default(),
        MemoryHost::new(),
    )
}

/// Outline over `rows` with row `index` focused at `caret`
pub fn test_outline_at(rows: &[&str], index: usize, caret: usize) -> Outline<MemoryHost> {
    let mut outline = test_outline(rows);
    let id = row_id(&outline, index);
    outline.click(id, caret);
    outline
}

pub fn row_id(outline: &Outline<MemoryHost>, index: usize) -> RowId {
    outline.rows()[index].id()
}

/// Document texts, top to bottom
pub fn texts(outline: &Outline<MemoryHost>) -> Vec<String> {
    outline
        .rows()
        .iter()
        .map(|r| r.text().to_string())
        .collect()
}

pub fn focused_index(outline: &Outline<MemoryHost>) -> Option<usize> {
    let id = outline.document().focused()?;
    outline.document().index_of(id)
}

/// Press a key described as a key string ("enter", "ctrl+up", ...)
pub fn press(outline: &mut Outline<MemoryHost>, key: &str) -> bool {
    let stroke = parse_key_string(key).expect("valid key string");
    outline.press(stroke)
}

/// The host presentation must mirror the document exactly
pub fn assert_mirrored(outline: &Outline<MemoryHost>) {
    let host = outline.host();
    let doc_ids: Vec<RowId> = outline.rows().iter().map(Row::id).collect();
    assert_eq!(host.order(), doc_ids, "host order differs from document");
    assert_eq!(
        host.texts(),
        texts(outline),
        "host texts differ from document"
    );
    for row in outline.rows() {
        let shown = host.checkbox(row.id());
        let expected = row.has_checkbox().then_some(row.is_checked());
        assert_eq!(shown, expected, "checkbox of {} not mirrored", row.id());
    }
    if let Some(focus) = outline.document().focused() {
        assert_eq!(host.focused(), Some(focus), "host focus differs");
        assert!(host.surface(focus).is_some());
    }
}
