//! Boundary classification for composed messages.
//!
//! A finished message is decided once, here, to be either structured JSON or
//! raw text. Nothing downstream re-parses it.

use std::fmt;

use serde_json::{Map, Value};

/// Sender id attached to outgoing envelopes when none is configured.
pub const DEFAULT_SENDER: &str = "user";

const TAG_SERVER_WARNING: &str = "[From server]";
const TAG_RECEIVED: &str = "[Received]";
const WARNING_PREFIX: &str = "Warning:";

/// A composed message after boundary classification.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The message parsed as JSON once line breaks were removed.
    Structured(Value),
    /// Anything else, kept exactly as composed.
    Raw(String),
}

impl Payload {
    /// Classify a logical message.
    ///
    /// Line breaks are removed before parsing so JSON typed across several
    /// continued lines still parses. A raw result keeps the original text.
    pub fn classify(message: &str) -> Self {
        let joined: String = message.chars().filter(|c| *c != '\n').collect();
        match serde_json::from_str::<Value>(&joined) {
            Ok(value) => Self::Structured(value),
            Err(_) => Self::Raw(message.to_string()),
        }
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}

/// Wrap a payload for sending, stamping it with `sender`.
///
/// Raw text becomes `{"message": text}`; JSON objects are kept as-is. Other
/// JSON values cannot carry a sender and are dropped.
pub fn outgoing_envelope(payload: Payload, sender: &str) -> Option<Map<String, Value>> {
    let mut envelope = match payload {
        Payload::Raw(text) => {
            let mut map = Map::new();
            map.insert("message".to_string(), Value::String(text));
            map
        }
        Payload::Structured(Value::Object(map)) => map,
        Payload::Structured(_) => return None,
    };
    envelope.insert("from".to_string(), Value::String(sender.to_string()));
    Some(envelope)
}

/// How an inbound message is shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundDisplay {
    pub tag: &'static str,
    pub content: Value,
}

impl InboundDisplay {
    /// Pick the displayed content and tag for an inbound value.
    ///
    /// Objects with a `content` field show that field; anything else is shown
    /// whole. String content starting with `Warning:` is tagged as a server
    /// notice.
    pub fn from_value(value: &Value) -> Self {
        let content = match value {
            Value::Object(map) if map.contains_key("content") => map["content"].clone(),
            other => other.clone(),
        };
        let tag = match &content {
            Value::String(text) if text.starts_with(WARNING_PREFIX) => TAG_SERVER_WARNING,
            _ => TAG_RECEIVED,
        };
        Self { tag, content }
    }
}

impl fmt::Display for InboundDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Value::String(text) => write!(f, "{} {}", self.tag, text),
            other => write!(f, "{} {}", self.tag, other),
        }
    }
}
