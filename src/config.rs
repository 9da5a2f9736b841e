//! Outline configuration persistence
//!
//! Stores user preferences in `~/.config/checkline/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::keys::{parse_modifier, Modifiers};

/// Outline configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Modifier that turns Up/Down into row reordering (e.g., "ctrl", "alt", "cmd")
    #[serde(default = "default_reorder_modifier")]
    pub reorder_modifier: String,
    /// Glyph rendered in front of checked rows
    #[serde(default = "default_checked_glyph")]
    pub checked_glyph: String,
    /// Glyph rendered in front of unchecked rows
    #[serde(default = "default_unchecked_glyph")]
    pub unchecked_glyph: String,
}

fn default_reorder_modifier() -> String {
    "ctrl".to_string()
}

fn default_checked_glyph() -> String {
    "[x]".to_string()
}

fn default_unchecked_glyph() -> String {
    "[ ]".to_string()
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            reorder_modifier: default_reorder_modifier(),
            checked_glyph: default_checked_glyph(),
            unchecked_glyph: default_unchecked_glyph(),
        }
    }
}

impl OutlineConfig {
    /// Load config from the user config directory, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the user config directory
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating the parent directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// The reorder modifier, falling back to Ctrl for unknown names
    pub fn reorder_modifier(&self) -> Modifiers {
        match parse_modifier(&self.reorder_modifier) {
            Ok(mods) => mods,
            Err(e) => {
                tracing::warn!("{}, falling back to ctrl", e);
                Modifiers::CTRL
            }
        }
    }
}
