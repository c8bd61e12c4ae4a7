//! HTTP fetching
//!
//! Downloads repository documents and archives into memory. There is no
//! retry and no partial-failure recovery: a transient network error aborts
//! the whole run. Checksums are computed by the caller over exactly the
//! bytes returned here.

use futures::StreamExt;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};

use crate::error::FetchError;

/// Progress callback type: (`bytes_received`, `total_bytes`)
///
/// The total is the server-declared content length, 0 when unknown.
pub type ProgressCallback = Box<dyn Fn(u64, u64) + Send + Sync>;

/// HTTP client wrapper for the download repositories
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a new fetcher
    ///
    /// Only the connection attempt is bounded. SDK archives run into the
    /// hundreds of megabytes, so the transfer itself carries no client-side
    /// timeout.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Download a document or archive into memory
    ///
    /// Fails on any non-success status. A content type differing from
    /// `expected_type` is logged and ignored; repository mirrors routinely
    /// mislabel archives.
    pub async fn fetch(
        &self,
        url: &str,
        expected_type: &str,
        progress: Option<&ProgressCallback>,
    ) -> Result<Vec<u8>, FetchError> {
        info!(url = %url, "download URL");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                url: response.url().to_string(),
                status: response.status().as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        if content_type != expected_type {
            warn!(
                expected = %expected_type,
                got = %content_type,
                "invalid content type"
            );
        }

        let total = response.content_length().unwrap_or(0);
        let mut body = Vec::new();
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::Network {
                url: url.to_string(),
                error: e.to_string(),
            })?;
            body.extend_from_slice(&chunk);

            if let Some(cb) = progress {
                cb(body.len() as u64, total);
            }
        }

        Ok(body)
    }

    /// Download a text document
    pub async fn fetch_text(&self, url: &str, expected_type: &str) -> Result<String, FetchError> {
        let body = self.fetch(url, expected_type, None).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}
