use thiserror::Error;

use super::types::{Location, Selector};

/// Terminal failures of one forecast request.
///
/// `Display` is the text sent back to the requesting station.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AvcanError {
    #[error("Failed to fetch location")]
    LocationUnavailable,

    #[error("Unable to get avalanche forecast")]
    ForecastUnavailable,

    #[error("No forecast for {0}")]
    NoForecastForLocation(Location),

    #[error("No data for requested section")]
    NoMatchingSection(Selector),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(AvcanError::LocationUnavailable.to_string(), "Failed to fetch location");
        assert_eq!(AvcanError::ForecastUnavailable.to_string(), "Unable to get avalanche forecast");
        assert_eq!(
            AvcanError::NoForecastForLocation(Location::new(51.1, -115.5)).to_string(),
            "No forecast for 51.1,-115.5"
        );
        assert_eq!(
            AvcanError::NoMatchingSection(Selector::WeatherSummary).to_string(),
            "No data for requested section"
        );
    }
}
