use async_trait::async_trait;
use std::path::PathBuf;

use crate::{cache, error::ScrapeError};

use super::MarkupSource;

/// Reads markup captured by an earlier live run.
#[derive(Debug, Clone)]
pub struct CachedFetcher {
    path: PathBuf,
}

impl CachedFetcher {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl MarkupSource for CachedFetcher {
    async fn fetch_markup(&self) -> Result<String, ScrapeError> {
        cache::read_markup(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_cache_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = CachedFetcher::new(dir.path().join("pw_foreca_porvoo.html"));

        let err = fetcher.fetch_markup().await.unwrap_err();
        assert!(matches!(err, ScrapeError::CacheMissing { .. }));
    }
}
