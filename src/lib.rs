//! checkline - editable checklist outline rows
//!
//! This crate provides the row state machine and keyboard-gesture interpreter
//! for an in-place editable outline, following the Elm Architecture pattern:
//! host key events become [`Msg`]s, [`update`](update::update) mutates the
//! [`OutlineModel`], and the returned [`Cmd`] is executed against the host.

pub mod caret;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod keys;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::OutlineConfig;
pub use messages::Msg;
pub use model::OutlineModel;
pub use runtime::Outline;
