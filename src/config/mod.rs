//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. CLI flags (applied by the binary on top of the loaded config)
//! 2. Environment variables (`LINEWEAVE_PROMPT`, `LINEWEAVE_SENTINEL`, ...)
//! 3. TOML file specified via --config CLI flag
//! 4. ./lineweave.toml in the current directory
//! 5. $XDG_CONFIG_HOME/lineweave/lineweave.toml (or ~/.config/...)
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;
use crate::tui::settings;

mod env;
mod sources;
mod types;

pub use env::parse_sentinel;
pub use sources::{config_root_dir, ConfigSource};
pub use types::{Config, DisplayConfig, EditorConfig, PayloadConfig};

/// Configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.config)
}

/// Load configuration and report which source supplied it.
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(crate) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        sources::read_config_text_with_sources(path_override, &read_file, &config_root)?;
    debug!(?source, "config source resolved");
    let mut config: Config = toml::from_str(&config_text)?;
    env::apply_runtime_env_overrides(&mut config, &env_lookup)?;
    validate_config(&config)?;
    Ok(LoadedConfig { config, source })
}

/// Reject settings that would corrupt the redraw math or never terminate a line.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let editor = &config.editor;
    if matches!(editor.sentinel, '\n' | '\r') {
        return Err(ConfigError::Invalid(
            "editor.sentinel cannot be a line break".to_string(),
        ));
    }
    for (name, prompt) in [
        ("editor.prompt", &editor.prompt),
        ("editor.continuation_prompt", &editor.continuation_prompt),
    ] {
        if prompt.chars().any(char::is_control) {
            return Err(ConfigError::Invalid(format!(
                "{name} must not contain control characters"
            )));
        }
    }
    if editor.tab_size > settings::TAB_SIZE_MAX {
        return Err(ConfigError::Invalid(format!(
            "editor.tab_size must be at most {}, got {}",
            settings::TAB_SIZE_MAX,
            editor.tab_size
        )));
    }
    Ok(())
}
