//! Configuration data model.
//!
//! Struct definitions plus default values. Loading and precedence live in
//! `config::mod`.

use serde::Deserialize;

use crate::payload::DEFAULT_SENDER;
use crate::tui::settings;
use crate::tui::SessionOptions;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub editor: EditorConfig,
    pub display: DisplayConfig,
    pub payload: PayloadConfig,
}

impl Config {
    /// Session options for one logical read.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            prompt: self.editor.prompt.clone(),
            continuation_prompt: self.editor.continuation_prompt.clone(),
            sentinel: self.editor.sentinel,
            tab_size: self.editor.tab_size,
            color: self.display.color,
        }
    }
}

/// Line-editor settings under `[editor]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    pub prompt: String,
    pub continuation_prompt: String,
    /// Trailing character that continues a message on the next line.
    pub sentinel: char,
    /// Tab stop width; 0 makes a tab one cell wide.
    pub tab_size: usize,
    /// Read sentinel-continued messages instead of single lines.
    pub multiline: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            prompt: settings::PROMPT_PRIMARY.to_string(),
            continuation_prompt: settings::PROMPT_CONTINUATION.to_string(),
            sentinel: settings::SENTINEL,
            tab_size: settings::TAB_SIZE,
            multiline: false,
        }
    }
}

/// Output styling under `[display]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Outgoing envelope settings under `[payload]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PayloadConfig {
    /// Value stamped into the `from` field of every envelope.
    pub sender: String,
}

impl Default for PayloadConfig {
    fn default() -> Self {
        Self {
            sender: DEFAULT_SENDER.to_string(),
        }
    }
}
