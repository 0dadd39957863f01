use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator, error::CmdError};
use serde_json::{Map, Value, json};
use std::{path::PathBuf, time::Duration};
use tracing::{info, warn};

use crate::{Config, cache, error::ScrapeError, extract::RENDERED_MARKER};

use super::MarkupSource;

/// Renders the observation page in headless Chrome through a WebDriver
/// endpoint and refreshes the markup cache.
#[derive(Debug, Clone)]
pub struct LiveFetcher {
    url: String,
    webdriver_url: String,
    cache_path: PathBuf,
    render_timeout: Duration,
}

impl LiveFetcher {
    pub fn new(
        url: String,
        webdriver_url: String,
        cache_path: PathBuf,
        render_timeout: Duration,
    ) -> Self {
        Self {
            url,
            webdriver_url,
            cache_path,
            render_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.url.clone(),
            config.webdriver_url.clone(),
            config.cache_path.clone(),
            config.render_timeout(),
        )
    }

    async fn connect(&self) -> Result<Client, ScrapeError> {
        ClientBuilder::native()
            .capabilities(headless_chrome_capabilities())
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| {
                ScrapeError::browser(
                    &self.url,
                    format!("no WebDriver session at {}: {e}", self.webdriver_url),
                )
            })
    }

    /// Navigate, wait for the temperature paragraph to appear, and capture
    /// the materialized page source.
    async fn render(&self, client: &Client) -> Result<String, CmdError> {
        client.goto(&self.url).await?;
        client
            .wait()
            .at_most(self.render_timeout)
            .for_element(Locator::Css(RENDERED_MARKER))
            .await?;
        client.source().await
    }
}

fn headless_chrome_capabilities() -> Map<String, Value> {
    let mut caps = Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        json!({ "args": ["--headless", "--disable-gpu", "--no-sandbox"] }),
    );
    caps
}

#[async_trait]
impl MarkupSource for LiveFetcher {
    async fn fetch_markup(&self) -> Result<String, ScrapeError> {
        info!(url = %self.url, webdriver = %self.webdriver_url, "rendering page");

        let client = self.connect().await?;
        let rendered = self.render(&client).await;

        // Always release the browser session, even when rendering failed.
        if let Err(err) = client.close().await {
            warn!(error = %err, "failed to close browser session");
        }

        let markup = rendered.map_err(|e| ScrapeError::browser(&self.url, e))?;
        cache::write_markup(&self.cache_path, &markup).await?;
        Ok(markup)
    }
}
