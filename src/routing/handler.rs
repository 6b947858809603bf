//! Greeting handlers selected by the router.

use serde::{Deserialize, Serialize};

/// Payload returned for every resolved request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The handlers a route can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handler {
    /// Fixed greeting for `/`.
    Root,
    /// Personalized greeting using the captured segment.
    Named,
    /// Fixed reply for everything else.
    Fallback,
}

impl Handler {
    /// Label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            Handler::Root => "root",
            Handler::Named => "named",
            Handler::Fallback => "fallback",
        }
    }

    /// Build the response payload.
    ///
    /// `captured` is echoed as plain text; it is never escaped or interpreted.
    pub fn respond(&self, captured: Option<&str>) -> Greeting {
        match self {
            Handler::Root => Greeting::new("hi"),
            Handler::Named => Greeting::new(format!("hello, {}!", captured.unwrap_or_default())),
            Handler::Fallback => Greeting::new("fallback"),
        }
    }
}

impl std::fmt::Display for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
