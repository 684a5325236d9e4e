// src/config.rs
use crate::error::{ChatError, Result};

pub const DEFAULT_FALLBACK_REPLY: &str = "Sorry, I don't understand that.";

/// User-facing strings of a chat session and the token that ends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub bot_name: String,
    pub user_prompt: String,
    pub greeting: String,
    pub farewell: String,
    /// Matched case-insensitively anywhere in the input line.
    pub exit_token: String,
    pub fallback_reply: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_name: "Chatbot".to_string(),
            user_prompt: "You: ".to_string(),
            greeting: "Hello! How can I assist you today? (Type 'bye' to exit.)".to_string(),
            farewell: "Goodbye!".to_string(),
            exit_token: "bye".to_string(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
        }
    }
}

impl ChatConfig {
    pub fn validate(&self) -> Result<()> {
        if self.exit_token.trim().is_empty() {
            return Err(ChatError::config("exit token cannot be empty"));
        }
        if self.fallback_reply.trim().is_empty() {
            return Err(ChatError::config("fallback reply cannot be empty"));
        }
        Ok(())
    }
}
