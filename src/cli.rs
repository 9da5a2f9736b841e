//! Command-line argument parsing for the outline replayer
//!
//! Supports:
//! - Initial rows given as positional arguments
//! - Key scripts inline (`--keys`, repeatable) or from a file (`--script`)
//! - Text or JSON output
//! - Persisting the effective settings (`--save-config`)

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::keys::{parse_script, ScriptStep};

/// Replay keystrokes against an editable checklist outline
#[derive(Parser, Debug)]
#[command(
    name = "checkline",
    version,
    about = "Replay keystrokes against an editable checklist outline"
)]
pub struct CliArgs {
    /// Initial row contents, top to bottom
    #[arg(value_name = "ROWS")]
    pub rows: Vec<String>,

    /// One key script line, e.g. "text:[] milk" or "enter ctrl+up" (repeatable)
    #[arg(short = 'k', long = "keys", value_name = "LINE")]
    pub keys: Vec<String>,

    /// Read the key script from a file (runs before --keys lines)
    #[arg(short = 's', long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Output format for the resulting outline
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Ignore the user config file
    #[arg(long)]
    pub no_config: bool,

    /// Write the effective settings to the user config file
    #[arg(long)]
    pub save_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per row, checkbox glyph first
    Text,
    /// JSON report of the final rows
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub rows: Vec<String>,
    pub steps: Vec<ScriptStep>,
    pub format: OutputFormat,
    pub use_config_file: bool,
    pub save_config: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let mut script = String::new();

        if let Some(path) = &self.script {
            script = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read script {}: {}", path.display(), e))?;
            if !script.is_empty() && !script.ends_with('\n') {
                script.push('\n');
            }
        }

        for line in &self.keys {
            script.push_str(line);
            script.push('\n');
        }

        let steps = parse_script(&script).map_err(|e| e.to_string())?;

        Ok(StartupConfig {
            rows: self.rows,
            steps,
            format: self.format,
            use_config_file: !self.no_config,
            save_config: self.save_config,
        })
    }
}
