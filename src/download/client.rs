//! HTTP client wrapper for probing and streaming lecture files.

use std::path::Path;
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info};
use url::Url;

use super::error::DownloadError;
use crate::config::DEFAULT_PROBE_TIMEOUT;
use crate::progress::Progress;

/// HTTP connect timeout shared by probes and transfers.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for probing remote files and streaming them to disk.
///
/// Created once and reused across all targets of a run, taking advantage
/// of connection pooling. Probes carry a bounded per-request timeout;
/// transfers are only bounded when a transfer timeout is configured.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    probe_timeout: Duration,
    transfer_timeout: Option<Duration>,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a client with the default probe timeout (10 seconds) and
    /// no transfer timeout.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_PROBE_TIMEOUT, None)
    }

    /// Creates a client with explicit timeout values.
    ///
    /// `transfer_timeout` bounds each GET request end to end; `None` leaves
    /// transfers unbounded.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_timeouts(probe_timeout: Duration, transfer_timeout: Option<Duration>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .gzip(true)
            .user_agent(default_user_agent())
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self {
            client,
            probe_timeout,
            transfer_timeout,
        }
    }

    /// Issues a HEAD request and returns the response status.
    ///
    /// The caller decides what counts as available; the mirror loop treats
    /// exactly 200 as present and anything else as missing.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::Timeout`] when the probe exceeds the
    /// configured probe timeout, or [`DownloadError::Network`] for other
    /// request failures.
    pub async fn probe(&self, url: &Url) -> Result<StatusCode, DownloadError> {
        debug!(url = %url, "probing");
        let response = self
            .client
            .head(url.clone())
            .timeout(self.probe_timeout)
            .send()
            .await
            .map_err(|e| classify_request_error(url, e))?;
        Ok(response.status())
    }

    /// Streams `url` into the file at `path`, returning bytes written.
    ///
    /// The parent directory must already exist. The expected total is taken
    /// from the Content-Length header (0 when absent); the body is copied
    /// chunk by chunk, advancing a progress sink by the bytes written after
    /// each chunk. A failure mid-transfer leaves the partial file in place.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError::HttpStatus`] for non-success responses,
    /// [`DownloadError::Network`]/[`DownloadError::Timeout`] for request
    /// failures, and [`DownloadError::Io`] when writing to disk fails.
    pub async fn fetch_to_path(
        &self,
        url: &Url,
        path: &Path,
        progress: &dyn Progress,
    ) -> Result<u64, DownloadError> {
        debug!(url = %url, path = %path.display(), "starting transfer");

        let mut request = self.client.get(url.clone());
        if let Some(timeout) = self.transfer_timeout {
            request = request.timeout(timeout);
        }
        let response = request
            .send()
            .await
            .map_err(|e| classify_request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url.as_str(), status.as_u16()));
        }

        let total = response.content_length().unwrap_or(0);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| url.as_str().to_string());
        let sink = progress.begin(&name, total);

        let file = File::create(path)
            .await
            .map_err(|e| DownloadError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        let mut stream = response.bytes_stream();
        let mut bytes_written: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| classify_request_error(url, e))?;
            writer
                .write_all(&chunk)
                .await
                .map_err(|e| DownloadError::io(path, e))?;
            bytes_written += chunk.len() as u64;
            sink.advance(chunk.len() as u64);
        }

        // Ensure all data is flushed to disk
        writer
            .flush()
            .await
            .map_err(|e| DownloadError::io(path, e))?;
        sink.finish();

        info!(path = %path.display(), bytes = bytes_written, "transfer complete");
        Ok(bytes_written)
    }
}

/// Maps a reqwest error to a timeout or network variant with URL context.
fn classify_request_error(url: &Url, error: reqwest::Error) -> DownloadError {
    if error.is_timeout() {
        DownloadError::timeout(url.as_str())
    } else {
        DownloadError::network(url.as_str(), error)
    }
}

/// Default User-Agent identifying the tool.
fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("lecture-mirror/{version}")
}
