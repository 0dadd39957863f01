//! Core library for the `foreca` observation scraper.
//!
//! This crate defines:
//! - Configuration handling (fetch mode, page URL, cache location)
//! - Markup sources: live headless-browser rendering or the on-disk cache
//! - Extraction of the latest observation from rendered markup
//!
//! It is used by `foreca-cli`, but can also be reused by other binaries or services.

pub mod cache;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod model;
pub mod number;

pub use config::Config;
pub use error::ScrapeError;
pub use extract::extract_observation;
pub use fetcher::{FetchMode, MarkupSource, fetcher_from_config};
pub use model::Observation;
pub use number::{NumberParseError, parse_localized_number};

/// Fetch markup from `source` and extract the observation from it.
pub async fn observe(source: &dyn MarkupSource) -> Result<Observation, ScrapeError> {
    let markup = source.fetch_markup().await?;
    extract_observation(&markup)
}
