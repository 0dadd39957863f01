//! The single-file cache of rendered markup.

use std::{io::ErrorKind, path::Path};

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::ScrapeError;

/// Write `markup` to `path`, creating parent directories as needed.
pub async fn write_markup(path: &Path, markup: &str) -> Result<(), ScrapeError> {
    let io_err = |source| ScrapeError::CacheIo {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    tokio::fs::write(path, markup).await.map_err(io_err)?;
    info!(path = %path.display(), bytes = markup.len(), "saved rendered markup");
    Ok(())
}

/// Read previously saved markup from `path`.
pub async fn read_markup(path: &Path) -> Result<String, ScrapeError> {
    let markup = tokio::fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ScrapeError::CacheMissing {
                path: path.to_path_buf(),
            }
        } else {
            ScrapeError::CacheIo {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    if let Some(saved_at) = saved_at(path).await {
        info!(
            path = %path.display(),
            saved_at = %saved_at.format("%Y-%m-%d %H:%M:%S"),
            "using cached markup"
        );
    }
    Ok(markup)
}

/// Modification time of the cache file, if the platform reports one.
pub async fn saved_at(path: &Path) -> Option<DateTime<Local>> {
    match tokio::fs::metadata(path).await.and_then(|m| m.modified()) {
        Ok(modified) => Some(DateTime::<Local>::from(modified)),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "cache mtime unavailable");
            None
        }
    }
}
