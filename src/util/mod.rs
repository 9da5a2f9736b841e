//! Utility modules

pub mod text;

pub use text::{char_len, char_to_byte, insert_char_at, remove_chars, split_at_char};
