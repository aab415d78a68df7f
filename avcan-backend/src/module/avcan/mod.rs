//! Avalanche Canada forecast responder
//!
//! Looks up the sender's last position on aprs.fi, fetches the Avalanche
//! Canada forecast for that point and replies with one section of it,
//! flattened to plain text and wrapped for APRS messages.
//!
//! ```text
//! "av"     -> danger ratings, one line per day
//! "av hl"  -> highlights
//! "av as"  -> avalanche summary
//! "av ss"  -> snowpack summary
//! "av ws"  -> weather summary
//! ```

pub mod classifier;
pub mod client;
pub mod error;
pub mod extractor;
pub mod forecast;
pub mod location;
pub mod responder;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{AprsFiClient, AvcanClient, ForecastService, LocationService};
pub use error::AvcanError;
pub use responder::AvcanResponder;
pub use types::{ForecastReport, Location, Selector};
