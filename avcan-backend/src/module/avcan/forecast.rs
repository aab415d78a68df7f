use super::client::ForecastService;
use super::error::AvcanError;
use super::types::{ForecastReport, Location};

/// Forecast report for `location`, passed through unmodified.
pub async fn fetch(service: &dyn ForecastService, location: Location) -> Result<ForecastReport, AvcanError> {
    service
        .get_forecast(location.latitude, location.longitude)
        .await
        .map_err(|e| {
            tracing::error!("Couldn't fetch avalanche forecast for {}: {:#}", location, e);
            AvcanError::ForecastUnavailable
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::avcan::testing::StubForecasts;
    use serde_json::json;

    #[tokio::test]
    async fn test_report_passed_through() {
        let service = StubForecasts::report(json!({"highlights": "<p>Low danger.</p>"}));
        let report = fetch(&service, Location::new(51.1, -115.5)).await.unwrap();
        assert_eq!(report.highlights.as_deref(), Some("<p>Low danger.</p>"));
        assert_eq!(service.last_request(), Some((51.1, -115.5)));
    }

    #[tokio::test]
    async fn test_failure() {
        let service = StubForecasts::failing();
        let result = fetch(&service, Location::new(51.1, -115.5)).await;
        assert!(matches!(result, Err(AvcanError::ForecastUnavailable)));
        assert_eq!(service.calls(), 1);
    }
}
