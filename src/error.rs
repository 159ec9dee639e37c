//! Unified error types for the line editor.

use std::fmt;

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// Errors that abort reading one logical message.
#[derive(Debug)]
pub enum InputError {
    /// Read, write, flush, or terminal-size query failed.
    Io(std::io::Error),
    /// Input closed before a non-continued line was read.
    StreamClosed,
}

impl InputError {
    pub fn is_stream_closed(&self) -> bool {
        matches!(self, Self::StreamClosed)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::StreamClosed => write!(f, "input stream closed before the message was finished"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::StreamClosed => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_error_display() {
        assert_eq!(
            InputError::StreamClosed.to_string(),
            "input stream closed before the message was finished"
        );
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe gone");
        let e = InputError::from(io_err);
        assert!(e.to_string().starts_with("io:"), "got: {e}");
        assert!(!e.is_stream_closed());
        assert!(InputError::StreamClosed.is_stream_closed());
    }

    #[test]
    fn input_error_exposes_io_source() {
        use std::error::Error;
        let e = InputError::from(std::io::Error::other("boom"));
        assert!(e.source().is_some());
        assert!(InputError::StreamClosed.source().is_none());
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn config_error_invalid_message() {
        let e = ConfigError::Invalid("sentinel must be one character".into());
        assert_eq!(e.to_string(), "invalid config: sentinel must be one character");
    }
}
