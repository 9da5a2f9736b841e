//! Parsing of key strings ("ctrl+up") and line-based key scripts

use super::types::{KeyCode, Keystroke, Modifiers};

/// Errors that can occur when parsing key strings or scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    InvalidKey(String),
    InvalidModifier(String),
    /// A script line failed to parse (1-indexed line number)
    Script {
        line: usize,
        reason: String,
    },
}

impl std::fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyParseError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
            KeyParseError::InvalidModifier(m) => write!(f, "Invalid modifier: {}", m),
            KeyParseError::Script { line, reason } => {
                write!(f, "Script error on line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for KeyParseError {}

/// One step of a key script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Type these characters one keystroke at a time
    Type(String),
    /// Press a single keystroke
    Press(Keystroke),
}

/// Prefix marking a script line as literal text to type
pub const TEXT_PREFIX: &str = "text:";

/// Parse a modifier name like "ctrl" or "cmd"
pub fn parse_modifier(name: &str) -> Result<Modifiers, KeyParseError> {
    match name.trim().to_lowercase().as_str() {
        // Platform command key
        "cmd" => Ok(Modifiers::cmd()),
        "ctrl" | "control" => Ok(Modifiers::CTRL),
        "shift" => Ok(Modifiers::SHIFT),
        "alt" | "option" | "opt" => Ok(Modifiers::ALT),
        "meta" | "super" | "win" => Ok(Modifiers::META),
        other => Err(KeyParseError::InvalidModifier(other.to_string())),
    }
}

/// Parse a key string like "ctrl+up" into a Keystroke
pub fn parse_key_string(key_str: &str) -> Result<Keystroke, KeyParseError> {
    let key_str = key_str.trim();
    if key_str.is_empty() {
        return Err(KeyParseError::InvalidKey(key_str.to_string()));
    }

    // A lone "+" is the plus key, not a separator
    if key_str == "+" {
        return Ok(Keystroke::char('+'));
    }

    let mut mods = Modifiers::NONE;
    let mut key_part = None;

    for part in key_str.split('+') {
        if let Ok(m) = parse_modifier(part) {
            mods = mods | m;
            continue;
        }
        if key_part.is_some() {
            return Err(KeyParseError::InvalidKey(format!(
                "Multiple keys in binding: {}",
                key_str
            )));
        }
        key_part = Some(parse_key_code(part)?);
    }

    let key = key_part
        .ok_or_else(|| KeyParseError::InvalidKey(format!("No key found in: {}", key_str)))?;

    Ok(Keystroke::new(key, mods))
}

fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(if c == ' ' {
            KeyCode::Space
        } else {
            KeyCode::Char(c)
        });
    }

    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),

        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),

        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),

        _ => Err(KeyParseError::InvalidKey(format!("Unknown key: {}", key))),
    }
}

/// Parse a line-based key script.
///
/// `text:<chars>` types everything after the prefix verbatim (spaces included).
/// Any other non-blank line is a whitespace-separated list of key strings.
/// Lines starting with `#` are comments.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>, KeyParseError> {
    let mut steps = Vec::new();

    for (idx, line) in script.lines().enumerate() {
        if let Some(text) = line.strip_prefix(TEXT_PREFIX) {
            if !text.is_empty() {
                steps.push(ScriptStep::Type(text.to_string()));
            }
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        for token in trimmed.split_whitespace() {
            let stroke = parse_key_string(token).map_err(|e| KeyParseError::Script {
                line: idx + 1,
                reason: e.to_string(),
            })?;
            steps.push(ScriptStep::Press(stroke));
        }
    }

    Ok(steps)
}
