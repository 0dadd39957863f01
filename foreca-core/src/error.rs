use std::path::PathBuf;

use thiserror::Error;

use crate::number::NumberParseError;

/// Everything that can abort a single observation run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// WebDriver connection, navigation, render wait or page capture failed.
    #[error("Failed to render {url} in the browser: {message}")]
    Browser { url: String, message: String },

    #[error(
        "Cached markup not found at {}.\n\
         Hint: run `foreca show --mode live` once to populate the cache.",
        path.display()
    )]
    CacheMissing { path: PathBuf },

    #[error("Failed to access markup cache {}", path.display())]
    CacheIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixed markup node the extractor relies on is absent.
    #[error("Missing element in observation markup: {0}")]
    MissingElement(&'static str),

    #[error(transparent)]
    Number(#[from] NumberParseError),
}

impl ScrapeError {
    pub(crate) fn browser(url: &str, err: impl std::fmt::Display) -> Self {
        ScrapeError::Browser {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}
