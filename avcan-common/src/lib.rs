//! Types shared between the messaging gateway and its responders.

pub mod types;

pub use types::{InboundCommand, MessageResponse, MAX_LINE_WIDTH};
