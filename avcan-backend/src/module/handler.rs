//! Routes inbound APRS messages to responders.
use avcan_common::{InboundCommand, MessageResponse};
use regex::Regex;
use std::sync::{Arc, LazyLock};

use super::avcan::AvcanResponder;
use super::avcan::classifier::keyword_summary;

static COMMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*(\S+)\s*(.*)$").expect("command pattern is valid"));

/// Message handler with the avalanche forecast responder
pub struct MessageHandler {
    avcan: Arc<AvcanResponder>,
}

impl MessageHandler {
    pub fn new(avcan: Arc<AvcanResponder>) -> Self {
        Self { avcan }
    }

    /// Handle one incoming message
    pub async fn handle_message(&self, msg: &InboundCommand) -> MessageResponse {
        match parse_command(&msg.raw_text) {
            Some((command, args)) => self.router(msg, &command, &args).await,
            None => MessageResponse::failure("Command Parse failed, please check your input."),
        }
    }

    /// Route commands to appropriate handlers
    async fn router(&self, msg: &InboundCommand, command: &str, args: &str) -> MessageResponse {
        match command.to_lowercase().as_str() {
            "av" | "avcan" => self.avcan.respond(msg).await,
            "help" | "h" => help(args),
            _ => {
                tracing::debug!("Unknown command '{}' from {}", command, msg.sender_callsign);
                MessageResponse::failure(format!("Unknown command: {}", command))
            }
        }
    }
}

fn help(topic: &str) -> MessageResponse {
    match topic.trim().to_lowercase().as_str() {
        "" | "av" | "avcan" => MessageResponse::lines(vec![
            "avcan: Send av to get the forecast from your location".to_string(),
            format!("avcan: av [{}] for highlights or summaries", keyword_summary()),
        ]),
        other => MessageResponse::failure(format!("No help for {}", other)),
    }
}

/// Split message content into (command, arguments)
fn parse_command(content: &str) -> Option<(String, String)> {
    let caps = COMMAND_RE.captures(content)?;
    let command = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let args = caps.get(2).map_or("", |m| m.as_str()).to_string();
    Some((command, args))
}
