//! Runtime: drives one host against the outline model
//!
//! Each keystroke runs to completion before the next one is read:
//! read text and caret from the focused surface, run `update`, then either
//! execute the returned commands or let the host apply its default action
//! and mirror the result back into the document.

use crate::caret::{get_caret, set_caret};
use crate::commands::Cmd;
use crate::config::OutlineConfig;
use crate::host::{Host, Surface};
use crate::keys::{Keystroke, ScriptStep};
use crate::messages::Msg;
use crate::model::{Document, OutlineModel, Row, RowId};
use crate::update::update;

/// An outline bound to a host presentation
#[derive(Debug)]
pub struct Outline<H: Host> {
    model: OutlineModel,
    host: H,
}

impl<H: Host> Outline<H> {
    /// Mount every row of `model` onto `host` and focus the focused row
    pub fn new(model: OutlineModel, mut host: H) -> Self {
        for (index, row) in model.document.rows().iter().enumerate() {
            host.mount(row.id(), index, row.text());
            if row.has_checkbox() {
                host.show_checkbox(row.id(), row.is_checked());
            }
        }
        let mut outline = Self { model, host };
        if let Some(id) = outline.model.document.focused() {
            outline.execute(Cmd::SetCaret { row: id, offset: 0 });
        }
        outline
    }

    /// Outline over a content container: one row per item, one empty row if none
    pub fn from_contents<I, S>(contents: I, config: &OutlineConfig, host: H) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(OutlineModel::from_contents(contents, config), host)
    }

    pub fn model(&self) -> &OutlineModel {
        &self.model
    }

    pub fn document(&self) -> &Document {
        &self.model.document
    }

    pub fn rows(&self) -> &[Row] {
        self.model.document.rows()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Deliver one keystroke to the focused row.
    ///
    /// Returns true when a gesture handled it, false when the host default ran.
    pub fn press(&mut self, stroke: Keystroke) -> bool {
        let Some(id) = self.model.document.focused() else {
            tracing::debug!(target: "runtime", %stroke, "no focused row");
            return false;
        };
        let Some((text, caret)) = self.read_surface(id) else {
            tracing::warn!(target: "runtime", row = %id, "focused row has no surface");
            return false;
        };

        let msg = Msg::Key {
            stroke,
            text,
            caret,
        };
        if let Some(cmd) = update(&mut self.model, msg) {
            self.execute(cmd);
            return true;
        }

        self.host.default_action(id, &stroke);
        if let Some((text, caret)) = self.read_surface(id) {
            let msg = Msg::Synced {
                text,
                caret,
                track_caret: !stroke.key.is_vertical_arrow(),
            };
            if let Some(cmd) = update(&mut self.model, msg) {
                self.execute(cmd);
            }
        }
        false
    }

    /// Type `text` one keystroke per character
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(Keystroke::char(ch));
        }
    }

    /// Replay a parsed key script
    pub fn run_script(&mut self, steps: &[ScriptStep]) {
        for step in steps {
            match step {
                ScriptStep::Type(text) => self.type_text(text),
                ScriptStep::Press(stroke) => {
                    self.press(*stroke);
                }
            }
        }
    }

    /// Checkbox click on `row`
    pub fn toggle(&mut self, row: RowId) -> Option<bool> {
        let cmd = update(&mut self.model, Msg::ToggleChecked(row))?;
        self.execute(cmd);
        self.model.document.row(row).map(Row::is_checked)
    }

    /// Pointer focus on `row`, caret placed at `offset`
    pub fn click(&mut self, row: RowId, offset: usize) {
        if !self.model.document.contains(row) {
            return;
        }
        self.execute(Cmd::SetCaret { row, offset });
        if let Some(cmd) = update(&mut self.model, Msg::Focus(row)) {
            self.execute(cmd);
        }
    }

    /// Current caret offset on the focused row's surface
    pub fn caret(&self) -> Option<usize> {
        let id = self.model.document.focused()?;
        self.host.surface(id).map(get_caret)
    }

    /// Apply commands to the host, in order
    pub fn execute(&mut self, cmd: Cmd) {
        for cmd in cmd.into_vec() {
            match cmd {
                Cmd::None | Cmd::Batch(_) => {}
                Cmd::SetText { row, text } => {
                    if let Some(surface) = self.host.surface_mut(row) {
                        surface.set_text(&text);
                    }
                }
                Cmd::MountRow {
                    row,
                    index,
                    text,
                    checkbox,
                } => {
                    self.host.mount(row, index, &text);
                    if checkbox {
                        self.host.show_checkbox(row, false);
                    }
                }
                Cmd::UnmountRow(row) => self.host.unmount(row),
                Cmd::MoveRow { row, index } => self.host.move_to(row, index),
                Cmd::ShowCheckbox { row, checked } => self.host.show_checkbox(row, checked),
                Cmd::HideCheckbox(row) => self.host.hide_checkbox(row),
                Cmd::Focus(row) => self.host.focus(row),
                Cmd::SetCaret { row, offset } => {
                    self.host.focus(row);
                    if let Some(surface) = self.host.surface_mut(row) {
                        set_caret(surface, offset);
                    }
                }
            }
        }
    }

    fn read_surface(&self, row: RowId) -> Option<(String, usize)> {
        let surface = self.host.surface(row)?;
        let caret = get_caret(surface);
        tracing::trace!(target: "caret", %row, caret, "read caret");
        Some((surface.text().into_owned(), caret))
    }
}
