//! CLI argument parsing via clap.

use clap::Parser;
use lineweave::config::{parse_sentinel, Config};

/// Compose messages at the terminal and emit them as JSON envelopes.
///
/// End a line with the sentinel (default `\`) to continue the message on the
/// next line when multi-line mode is enabled.
#[derive(Debug, Parser)]
#[command(name = "lineweave", version)]
pub struct Args {
    /// Path to config file (default: ./lineweave.toml or ~/.config/lineweave/lineweave.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Read sentinel-continued multi-line messages.
    #[arg(short = 'm', long = "multiline")]
    pub multiline: bool,

    /// Override the primary prompt.
    #[arg(long = "prompt")]
    pub prompt: Option<String>,

    /// Override the continuation prompt.
    #[arg(long = "continuation-prompt")]
    pub continuation_prompt: Option<String>,

    /// Override the line-continuation sentinel (one character).
    #[arg(long = "sentinel", value_parser = parse_sentinel_arg)]
    pub sentinel: Option<char>,

    /// Override the tab stop width used for wrap math (0 = one cell).
    #[arg(long = "tab-size")]
    pub tab_size: Option<usize>,

    /// Sender id stamped into outgoing envelopes.
    #[arg(long = "sender")]
    pub sender: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Apply CLI overrides on top of file/env config.
    pub fn apply_to(&self, config: &mut Config) {
        if self.multiline {
            config.editor.multiline = true;
        }
        if let Some(prompt) = &self.prompt {
            config.editor.prompt = prompt.clone();
        }
        if let Some(prompt) = &self.continuation_prompt {
            config.editor.continuation_prompt = prompt.clone();
        }
        if let Some(sentinel) = self.sentinel {
            config.editor.sentinel = sentinel;
        }
        if let Some(tab_size) = self.tab_size {
            config.editor.tab_size = tab_size;
        }
        if let Some(sender) = &self.sender {
            config.payload.sender = sender.clone();
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}

fn parse_sentinel_arg(raw: &str) -> Result<char, String> {
    parse_sentinel(raw).map_err(str::to_string)
}
