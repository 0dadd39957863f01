use crate::{
    Config,
    error::ScrapeError,
    fetcher::{cached::CachedFetcher, live::LiveFetcher},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt::Debug};

pub mod cached;
pub mod live;

/// How the observation page markup is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    /// Render the page in a headless browser and refresh the cache.
    Live,
    /// Reuse previously rendered markup from the cache file.
    Cached,
}

impl FetchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchMode::Live => "live",
            FetchMode::Cached => "cached",
        }
    }

    pub const fn all() -> &'static [FetchMode] {
        &[FetchMode::Live, FetchMode::Cached]
    }
}

impl std::fmt::Display for FetchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FetchMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "live" => Ok(FetchMode::Live),
            "cached" => Ok(FetchMode::Cached),
            _ => {
                let supported: Vec<&str> = FetchMode::all().iter().map(FetchMode::as_str).collect();
                Err(anyhow::anyhow!(
                    "Unknown fetch mode '{value}'. Supported modes: {}.",
                    supported.join(", ")
                ))
            }
        }
    }
}

/// A source of rendered observation-page markup.
#[async_trait]
pub trait MarkupSource: Send + Sync + Debug {
    async fn fetch_markup(&self) -> Result<String, ScrapeError>;
}

/// Construct the markup source selected by `config.mode`.
pub fn fetcher_from_config(config: &Config) -> Box<dyn MarkupSource> {
    match config.mode {
        FetchMode::Live => Box::new(LiveFetcher::from_config(config)),
        FetchMode::Cached => Box::new(CachedFetcher::new(config.cache_path.clone())),
    }
}
