//! Forecast section extraction
//!
//! Turns the requested part of a [`ForecastReport`] into reply lines no wider
//! than [`MAX_LINE_WIDTH`].

use avcan_common::MAX_LINE_WIDTH;
use chrono::DateTime;
use thiserror::Error;

use super::error::AvcanError;
use super::text::{html_to_text, wrap_text};
use super::types::{BandRating, DangerRating, ForecastReport, Location, Selector};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The report carries no highlights, i.e. there is no forecast at all.
    #[error("report has no highlights")]
    NoForecast,

    #[error("report has no {0} section")]
    NoMatchingSection(Selector),
}

impl ExtractError {
    /// Attach the queried location to produce the request-level failure.
    pub fn at(self, location: Location) -> AvcanError {
        match self {
            ExtractError::NoForecast => AvcanError::NoForecastForLocation(location),
            ExtractError::NoMatchingSection(selector) => AvcanError::NoMatchingSection(selector),
        }
    }
}

/// Extract the lines for `selector` from `report`.
pub fn extract(selector: Selector, report: &ForecastReport) -> Result<Vec<String>, ExtractError> {
    let Some(highlights) = report.highlights.as_deref() else {
        return Err(ExtractError::NoForecast);
    };

    let lines = match selector {
        Selector::Danger => danger_lines(report),
        Selector::Highlights => html_lines(highlights),
        Selector::AvalancheSummary | Selector::SnowpackSummary | Selector::WeatherSummary => {
            selector
                .summary_type()
                .and_then(|kind| summary_content(report, kind))
                .map(html_lines)
                .unwrap_or_default()
        }
    };

    if lines.is_empty() {
        tracing::debug!("Report has nothing for section {}", selector);
        return Err(ExtractError::NoMatchingSection(selector));
    }
    Ok(lines)
}

/// One "Mon: alp:High, tl:Considerable, btl:Low" line per forecast day.
///
/// A day whose rating values do not fit on one line continues on the next.
fn danger_lines(report: &ForecastReport) -> Vec<String> {
    report
        .danger_ratings
        .as_deref()
        .unwrap_or_default()
        .iter()
        .flat_map(|day| wrap_text(&danger_line(day), MAX_LINE_WIDTH))
        .collect()
}

fn danger_line(day: &DangerRating) -> String {
    format!(
        "{}: alp:{}, tl:{}, btl:{}",
        day_abbreviation(day),
        band_value(day.ratings.alp.as_ref()),
        band_value(day.ratings.tln.as_ref()),
        band_value(day.ratings.btl.as_ref()),
    )
}

fn band_value(band: Option<&BandRating>) -> &str {
    band.map_or("n/a", |b| b.rating.value.as_str())
}

/// Three-letter day name from the display date, or from the ISO date when
/// the service sends no display text.
fn day_abbreviation(day: &DangerRating) -> String {
    if let Some(display) = day.date.display.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        return display.chars().take(3).collect();
    }

    day.date
        .value
        .as_deref()
        .and_then(|value| DateTime::parse_from_rfc3339(value).ok())
        .map(|date| date.format("%a").to_string())
        .unwrap_or_else(|| "???".to_string())
}

fn summary_content<'a>(report: &'a ForecastReport, kind: &str) -> Option<&'a str> {
    report
        .summaries
        .as_deref()?
        .iter()
        .find(|summary| summary.kind.value() == kind)
        .and_then(|summary| summary.content.as_deref())
}

fn html_lines(html: &str) -> Vec<String> {
    wrap_text(&html_to_text(html), MAX_LINE_WIDTH)
}
