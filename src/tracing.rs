//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! gesture handling and row-list state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=gesture=debug,caret=trace` - scoped filtering
//! - `RUST_LOG=checkline::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/checkline/logs/checkline.log` with daily
//! rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{OutlineModel, RowId};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with rendered output.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "checkline.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of the row list for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub rows: Vec<RowInfo>,
    pub focus: Option<RowId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowInfo {
    pub id: RowId,
    pub text_len: usize,
    pub has_checkbox: bool,
    pub checked: bool,
}

impl DocumentSnapshot {
    pub fn from_model(model: &OutlineModel) -> Self {
        Self {
            rows: model
                .document
                .rows()
                .iter()
                .map(|r| RowInfo {
                    id: r.id(),
                    text_len: r.text().chars().count(),
                    has_checkbox: r.has_checkbox(),
                    checked: r.is_checked(),
                })
                .collect(),
            focus: model.document.focused(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &DocumentSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.rows.len() != other.rows.len() {
            changes.push(format!("rows: {} → {}", self.rows.len(), other.rows.len()));
        } else {
            let order_changed = self.rows.iter().zip(&other.rows).any(|(a, b)| a.id != b.id);
            if order_changed {
                changes.push("order changed".to_string());
            }
            for (before, after) in self.rows.iter().zip(&other.rows) {
                if before.id != after.id {
                    continue;
                }
                if before.has_checkbox != after.has_checkbox {
                    let status = if after.has_checkbox {
                        "added"
                    } else {
                        "removed"
                    };
                    changes.push(format!("{}: checkbox {}", after.id, status));
                } else if before.checked != after.checked {
                    changes.push(format!("{}: checked={}", after.id, after.checked));
                }
            }
        }

        if self.focus != other.focus {
            let show = |f: Option<RowId>| f.map_or("none".to_string(), |id| id.to_string());
            changes.push(format!(
                "focus: {} → {}",
                show(self.focus),
                show(other.focus)
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
