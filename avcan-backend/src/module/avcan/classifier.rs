//! Subcommand classification
//!
//! Only the token right after the command name is examined, so a message can
//! select at most one section.

use super::types::Selector;

/// (abbreviation, full word, selector)
const KEYWORDS: &[(&str, &str, Selector)] = &[
    ("hl", "highlights", Selector::Highlights),
    ("as", "summary", Selector::AvalancheSummary),
    ("ss", "snowpack", Selector::SnowpackSummary),
    ("ws", "weather", Selector::WeatherSummary),
];

/// Pick the report section requested by `raw_text`, e.g. "av hl".
///
/// Anything that is not a known keyword, including a callsign, selects the
/// danger ratings.
pub fn classify(raw_text: &str) -> Selector {
    let Some(token) = raw_text.split_whitespace().nth(1) else {
        return Selector::Danger;
    };
    let token = token.to_lowercase();

    KEYWORDS
        .iter()
        .find(|(abbr, word, _)| token == *abbr || token == *word)
        .map(|(_, _, selector)| *selector)
        .unwrap_or_default()
}

/// Keyword list for help output, e.g. "hl|as|ss|ws".
pub fn keyword_summary() -> String {
    KEYWORDS
        .iter()
        .map(|(abbr, _, _)| *abbr)
        .collect::<Vec<_>>()
        .join("|")
}
