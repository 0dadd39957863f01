use serde::{Deserialize, Serialize};

/// One scraped weather observation.
///
/// The `*_text` fields hold the display strings exactly as they appear in
/// the page; the numeric fields are parsed from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp_text: String,
    pub temperature_text: String,
    pub temperature_c: f64,
    pub feels_like_text: String,
    pub feels_like_c: f64,
}
