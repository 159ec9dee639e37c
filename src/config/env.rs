//! Environment overrides.
//!
//! `LINEWEAVE_*` variables override values read from config files.

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_PROMPT: &str = "LINEWEAVE_PROMPT";
pub(super) const ENV_CONTINUATION_PROMPT: &str = "LINEWEAVE_CONTINUATION_PROMPT";
pub(super) const ENV_SENTINEL: &str = "LINEWEAVE_SENTINEL";
pub(super) const ENV_TAB_SIZE: &str = "LINEWEAVE_TAB_SIZE";
pub(super) const ENV_MULTILINE: &str = "LINEWEAVE_MULTILINE";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(prompt) = env_lookup(ENV_PROMPT) {
        config.editor.prompt = prompt;
    }
    if let Some(prompt) = env_lookup(ENV_CONTINUATION_PROMPT) {
        config.editor.continuation_prompt = prompt;
    }
    if let Some(sentinel) = env_lookup(ENV_SENTINEL) {
        config.editor.sentinel = parse_sentinel(&sentinel).map_err(|msg| {
            ConfigError::Invalid(format!("invalid {ENV_SENTINEL} value `{sentinel}`: {msg}"))
        })?;
    }
    if let Some(tab_size) = env_lookup(ENV_TAB_SIZE) {
        config.editor.tab_size = tab_size.trim().parse::<usize>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid {ENV_TAB_SIZE} value `{tab_size}`: expected a non-negative integer"
            ))
        })?;
    }
    if let Some(multiline) = env_lookup(ENV_MULTILINE) {
        config.editor.multiline = parse_flag(&multiline).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "invalid {ENV_MULTILINE} value `{multiline}`: expected 0/1 or true/false"
            ))
        })?;
    }
    Ok(())
}

/// Parse a sentinel given as text: exactly one character.
pub fn parse_sentinel(raw: &str) -> Result<char, &'static str> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        (None, _) => Err("expected one character, got none"),
        _ => Err("expected exactly one character"),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
