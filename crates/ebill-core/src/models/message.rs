//! Inbound SMS envelope.

use serde::{Deserialize, Serialize};

/// One inbound SMS as delivered by the upstream webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Originating sender identifier.
    pub sender: String,

    /// The raw message body handed to the parsers.
    pub body: String,

    /// Synthetic message that must be routed but never stored.
    #[serde(default)]
    pub test: bool,
}

impl Message {
    /// Create a message with the given sender and body.
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
            test: false,
        }
    }
}
