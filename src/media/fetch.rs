// SPDX-License-Identifier: MPL-2.0
//! Asynchronous page fetching.
//!
//! Local pages are read and decoded on the blocking pool; remote pages are
//! downloaded with `reqwest` and then decoded on the blocking pool. Every
//! failure is reported as [`Error::Fetch`] naming the page, never as a panic.

use crate::domain::PageRef;
use crate::error::{Error, Result};
use crate::media::cache::PageKey;
use crate::media::image::{self, ImageData};
use std::time::Duration;

/// Per-request timeout for remote pages.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of one fetch, delivered back to the UI thread.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub key: PageKey,
    pub result: Result<ImageData>,
}

/// Shared page fetcher. Cloning shares the HTTP connection pool.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|err| {
                log::warn!("Falling back to default HTTP client: {err}");
                reqwest::Client::new()
            });
        Self { client }
    }

    /// Fetches and decodes one page rendition.
    pub async fn fetch(self, key: PageKey, src: PageRef) -> FetchOutcome {
        log::debug!("Fetching page {} ({:?}) from {src}", key.index, key.resolution);
        let result = self.load(src).await.map_err(|err| Error::Fetch {
            page: key.index,
            reason: err.to_string(),
        });
        FetchOutcome { key, result }
    }

    async fn load(&self, src: PageRef) -> Result<ImageData> {
        match src {
            PageRef::Path(path) => decode_blocking(move || image::load_image(&path)).await,
            PageRef::Url(url) => {
                let response = self.client.get(&url).send().await?.error_for_status()?;
                let bytes = response.bytes().await?;
                decode_blocking(move || image::decode(&bytes)).await
            }
        }
    }
}

async fn decode_blocking<F>(job: F) -> Result<ImageData>
where
    F: FnOnce() -> Result<ImageData> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .unwrap_or_else(|e| Err(Error::Decode(format!("decode task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resolution;
    use crate::test_utils::png_bytes;
    use tempfile::tempdir;

    fn key(index: usize) -> PageKey {
        PageKey {
            index,
            resolution: Resolution::Display,
        }
    }

    #[tokio::test]
    async fn fetch_local_page_decodes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("pg1.png");
        std::fs::write(&path, png_bytes(5, 7)).expect("write");

        let outcome = Fetcher::new().fetch(key(0), PageRef::Path(path)).await;
        let data = outcome.result.expect("decoded");
        assert_eq!((data.width, data.height), (5, 7));
        assert_eq!(outcome.key, key(0));
    }

    #[tokio::test]
    async fn fetch_missing_page_reports_page_index() {
        let dir = tempdir().expect("temp dir");
        let outcome = Fetcher::new()
            .fetch(key(3), PageRef::Path(dir.path().join("gone.png")))
            .await;
        assert!(matches!(outcome.result, Err(Error::Fetch { page: 3, .. })));
    }

    #[tokio::test]
    async fn fetch_corrupt_page_is_fetch_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("pg1.png");
        std::fs::write(&path, b"not a png").expect("write");
        let outcome = Fetcher::new().fetch(key(0), PageRef::Path(path)).await;
        assert!(matches!(outcome.result, Err(Error::Fetch { page: 0, .. })));
    }
}
