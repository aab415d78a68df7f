use super::client::LocationService;
use super::error::AvcanError;
use super::types::Location;

/// Most recent position of `callsign`, as the first entry the service returns.
pub async fn resolve(
    service: &dyn LocationService,
    callsign: &str,
    api_key: &str,
) -> Result<Location, AvcanError> {
    let reply = service.get_location(api_key, callsign).await.map_err(|e| {
        tracing::error!("Failed to fetch aprs.fi data for {}: {:#}", callsign, e);
        AvcanError::LocationUnavailable
    })?;

    let Some(entry) = reply.entries.first() else {
        tracing::error!("Found no entries from aprs.fi for {}", callsign);
        return Err(AvcanError::LocationUnavailable);
    };

    let location = Location::new(entry.lat, entry.lng);
    tracing::debug!("Resolved {} to {}", callsign, location);
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::avcan::testing::{entry, StubLocations};

    #[tokio::test]
    async fn test_first_entry_wins() {
        let service = StubLocations::entries(vec![entry(51.1, -115.5), entry(49.0, -117.0)]);
        let location = resolve(&service, "KI7ABC", "key").await.unwrap();
        assert_eq!(location, Location::new(51.1, -115.5));
        assert_eq!(service.calls(), 1);
        assert_eq!(service.last_request(), Some(("key".to_string(), "KI7ABC".to_string())));
    }

    #[tokio::test]
    async fn test_no_entries() {
        let service = StubLocations::entries(vec![]);
        assert_eq!(
            resolve(&service, "KI7ABC", "key").await,
            Err(AvcanError::LocationUnavailable)
        );
    }

    #[tokio::test]
    async fn test_service_failure_is_not_retried() {
        let service = StubLocations::failing();
        assert_eq!(
            resolve(&service, "KI7ABC", "key").await,
            Err(AvcanError::LocationUnavailable)
        );
        assert_eq!(service.calls(), 1);
    }
}
