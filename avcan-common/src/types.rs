use serde::{Deserialize, Serialize};

/// Maximum number of characters a single reply line may carry on the radio side.
pub const MAX_LINE_WIDTH: usize = 67;

/// A text message handed to a responder by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundCommand {
    /// Callsign of the station that sent the message, e.g. "KI7ABC-9"
    pub sender_callsign: String,
    /// Full message text including the leading command token, e.g. "av hl"
    pub raw_text: String,
}

impl InboundCommand {
    pub fn new(sender_callsign: impl AsRef<str>, raw_text: impl Into<String>) -> Self {
        Self {
            sender_callsign: sender_callsign.as_ref().trim().to_uppercase(),
            raw_text: raw_text.into(),
        }
    }
}

/// Reply produced for one inbound message.
///
/// A failed invocation always carries exactly one line describing the failure,
/// cut to [`MAX_LINE_WIDTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub lines: Vec<String>,
    pub message_id: String,
}

impl MessageResponse {
    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            success: true,
            lines,
            message_id: uuid::Uuid::now_v7().to_string(),
        }
    }

    pub fn failure(message: impl AsRef<str>) -> Self {
        Self {
            success: false,
            lines: vec![message.as_ref().chars().take(MAX_LINE_WIDTH).collect()],
            message_id: uuid::Uuid::now_v7().to_string(),
        }
    }

    /// The failure text, when this response is a failure.
    pub fn failure_message(&self) -> Option<&str> {
        if self.success {
            None
        } else {
            self.lines.first().map(String::as_str)
        }
    }
}

impl std::fmt::Display for MessageResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
