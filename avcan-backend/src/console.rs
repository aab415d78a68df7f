//! Line-oriented stand-in for the radio gateway.
//!
//! Each input line is `CALLSIGN message text`; every reply line is written
//! back on its own output line.

use anyhow::Result;
use avcan_common::InboundCommand;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::module::handler::MessageHandler;

const USAGE: &str = "usage: CALLSIGN message, e.g. KI7ABC av hl";

#[derive(Debug, PartialEq, Eq)]
enum ConsoleLine {
    Blank,
    Command(InboundCommand),
    Invalid,
}

fn parse_line(line: &str) -> ConsoleLine {
    let line = line.trim();
    if line.is_empty() {
        return ConsoleLine::Blank;
    }

    match line.split_once(char::is_whitespace) {
        Some((callsign, text)) if !text.trim().is_empty() => {
            ConsoleLine::Command(InboundCommand::new(callsign, text.trim()))
        }
        _ => ConsoleLine::Invalid,
    }
}

/// Serve messages from `reader` until end of input.
pub async fn run<R, W>(handler: &MessageHandler, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let reply = match parse_line(&line) {
            ConsoleLine::Blank => continue,
            ConsoleLine::Invalid => vec![USAGE.to_string()],
            ConsoleLine::Command(command) => handler.handle_message(&command).await.lines,
        };

        for reply_line in reply {
            writer.write_all(reply_line.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.flush().await?;
    }

    tracing::info!("Console input closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::avcan::AvcanResponder;
    use crate::module::avcan::testing::{entry, StubForecasts, StubLocations};
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   "), ConsoleLine::Blank);
        assert_eq!(parse_line("KI7ABC"), ConsoleLine::Invalid);
        assert_eq!(parse_line("KI7ABC   "), ConsoleLine::Invalid);
        assert_eq!(
            parse_line("ki7abc av hl"),
            ConsoleLine::Command(InboundCommand::new("KI7ABC", "av hl"))
        );
    }

    #[tokio::test]
    async fn test_run_writes_reply_lines() {
        let locations = Arc::new(StubLocations::entries(vec![entry(51.1, -115.5)]));
        let forecasts = Arc::new(StubForecasts::report(json!({
            "highlights": "<p>Considerable danger above treeline.</p>"
        })));
        let handler = MessageHandler::new(Arc::new(AvcanResponder::new(locations, forecasts, "key")));

        let input: &[u8] = b"KI7ABC av hl\n\nKI7ABC\nKI7ABC wx\n";
        let mut output = Vec::new();
        run(&handler, input, &mut output).await.unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("Considerable danger above treeline.\n{}\nUnknown command: wx\n", USAGE)
        );
    }
}
