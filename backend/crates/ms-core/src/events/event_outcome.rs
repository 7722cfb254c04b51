use crate::{LocalUser, RelayCookie};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageLevel {
    Message,
    Notice,
    Warning,
    Error,
}

/// A message the host should show to the acting user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserMessage {
    pub level: MessageLevel,
    pub text: String,
}

/// What the host should do after an event was handled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventOutcome {
    /// Boolean result for events whose host contract expects one.
    pub accepted: bool,
    /// Rewritten user data, only for before-save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LocalUser>,
    #[serde(default)]
    pub messages: Vec<UserMessage>,
    #[serde(default)]
    pub cookies: Vec<RelayCookie>,
}

impl EventOutcome {
    pub fn new() -> Self {
        Self {
            accepted: true,
            data: None,
            messages: Vec::new(),
            cookies: Vec::new(),
        }
    }

    pub fn push_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(UserMessage {
            level,
            text: text.into(),
        });
    }

    pub fn with_message(mut self, level: MessageLevel, text: impl Into<String>) -> Self {
        self.push_message(level, text);
        self
    }
}

impl Default for EventOutcome {
    fn default() -> Self {
        Self::new()
    }
}
