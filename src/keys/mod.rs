//! Keystrokes as delivered by the host surface
//!
//! ```text
//! host key event → Keystroke → Msg::Key → update() → Option<Cmd>
//! ```

mod parse;
mod types;

pub use parse::{
    parse_key_string, parse_modifier, parse_script, KeyParseError, ScriptStep, TEXT_PREFIX,
};
pub use types::{KeyCode, Keystroke, Modifiers};
