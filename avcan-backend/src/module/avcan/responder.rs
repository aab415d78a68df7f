use avcan_common::{InboundCommand, MessageResponse};
use std::sync::Arc;

use super::classifier::classify;
use super::client::{ForecastService, LocationService};
use super::error::AvcanError;
use super::extractor::extract;
use super::{forecast, location};

/// Answers "av" commands with avalanche forecast lines for the sender's position.
pub struct AvcanResponder {
    locations: Arc<dyn LocationService>,
    forecasts: Arc<dyn ForecastService>,
    api_key: String,
}

impl AvcanResponder {
    pub fn new(
        locations: Arc<dyn LocationService>,
        forecasts: Arc<dyn ForecastService>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            locations,
            forecasts,
            api_key: api_key.into(),
        }
    }

    /// Produce the reply for one command. Failures become a single line.
    pub async fn respond(&self, command: &InboundCommand) -> MessageResponse {
        match self.forecast_lines(command).await {
            Ok(lines) => MessageResponse::lines(lines),
            Err(e) => {
                tracing::warn!("Avcan request from {} failed: {:?}", command.sender_callsign, e);
                MessageResponse::failure(e.to_string())
            }
        }
    }

    async fn forecast_lines(&self, command: &InboundCommand) -> Result<Vec<String>, AvcanError> {
        let selector = classify(&command.raw_text);
        tracing::info!(
            "Avcan request from {} '{}' -> {}",
            command.sender_callsign,
            command.raw_text,
            selector
        );

        let location =
            location::resolve(self.locations.as_ref(), &command.sender_callsign, &self.api_key).await?;
        let report = forecast::fetch(self.forecasts.as_ref(), location).await?;

        extract(selector, &report).map_err(|e| e.at(location))
    }
}
