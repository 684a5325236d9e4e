// src/message.rs
use serde::Serialize;

/// One bot answer. `intent` is `None` when the fallback sentence was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub intent: Option<String>,
    pub text: String,
}

impl Reply {
    pub fn matched(intent: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            intent: Some(intent.into()),
            text: text.into(),
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            intent: None,
            text: text.into(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.intent.is_none()
    }
}
