//! In-memory service doubles for tests

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::client::{ForecastService, LocationService};
use super::types::{ForecastReport, LocationEntry, LocationReply};

pub fn entry(lat: f64, lng: f64) -> LocationEntry {
    LocationEntry {
        name: None,
        lat,
        lng,
        lasttime: None,
    }
}

pub struct StubLocations {
    entries: Option<Vec<LocationEntry>>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, String)>>,
}

impl StubLocations {
    pub fn entries(entries: Vec<LocationEntry>) -> Self {
        Self {
            entries: Some(entries),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: None,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// (api_key, callsign) of the most recent call
    pub fn last_request(&self) -> Option<(String, String)> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocationService for StubLocations {
    async fn get_location(&self, api_key: &str, callsign: &str) -> Result<LocationReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((api_key.to_string(), callsign.to_string()));

        match &self.entries {
            Some(entries) => Ok(LocationReply {
                result: Some("ok".to_string()),
                description: None,
                entries: entries.clone(),
            }),
            None => Err(anyhow::anyhow!("connection refused")),
        }
    }
}

pub struct StubForecasts {
    report: Option<serde_json::Value>,
    calls: AtomicUsize,
    last: Mutex<Option<(f64, f64)>>,
}

impl StubForecasts {
    pub fn report(report: serde_json::Value) -> Self {
        Self {
            report: Some(report),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            report: None,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<(f64, f64)> {
        *self.last.lock().unwrap()
    }
}

#[async_trait]
impl ForecastService for StubForecasts {
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((latitude, longitude));

        match &self.report {
            Some(value) => Ok(serde_json::from_value(value.clone())?),
            None => Err(anyhow::anyhow!("transport error: connection reset")),
        }
    }
}
