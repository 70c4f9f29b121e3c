use crate::ports::outbound::ReportDownloader;
use crate::shared::error::AuditReportError;
use crate::shared::security::{validate_download_size, validate_not_symlink, MAX_REPORT_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use futures::StreamExt;
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

/// HttpReportDownloader adapter fetching reports over HTTPS
///
/// This adapter implements the ReportDownloader port with an async reqwest
/// client, streaming the body to disk instead of buffering it. No retry
/// and no integrity check are performed.
pub struct HttpReportDownloader {
    client: reqwest::Client,
    max_size: u64,
}

impl HttpReportDownloader {
    const TIMEOUT_SECONDS: u64 = 300;

    /// Creates a new downloader with default configuration
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("audit-report/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            max_size: MAX_REPORT_SIZE,
        })
    }

    /// Overrides the maximum accepted report size
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    fn download_error(url: &str, details: impl ToString) -> anyhow::Error {
        AuditReportError::DownloadFailed {
            url: redact_query(url),
            details: details.to_string(),
        }
        .into()
    }

    async fn write_body(&self, response: reqwest::Response, url: &str, destination: &Path) -> Result<u64> {
        let mut file = tokio::fs::File::create(destination).await.map_err(|e| {
            AuditReportError::FileWriteError {
                path: destination.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let mut written: u64 = 0;
        let mut body = response.bytes_stream();
        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| Self::download_error(url, e.without_url()))?;
            written += chunk.len() as u64;
            validate_download_size(written, &redact_query(url), self.max_size)?;
            file.write_all(&chunk)
                .await
                .map_err(|e| AuditReportError::FileWriteError {
                    path: destination.to_path_buf(),
                    details: e.to_string(),
                })?;
        }

        file.flush().await.map_err(|e| AuditReportError::FileWriteError {
            path: destination.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(written)
    }
}

/// Drops the query string so pre-signed credentials never reach the logs
fn redact_query(url: &str) -> String {
    match url.split_once('?') {
        Some((base, _)) => format!("{}?<redacted>", base),
        None => url.to_string(),
    }
}

#[async_trait]
impl ReportDownloader for HttpReportDownloader {
    async fn download(&self, url: &str, destination: &Path) -> Result<u64> {
        validate_not_symlink(destination, "write")?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::download_error(url, e.without_url()))?;

        if !response.status().is_success() {
            return Err(Self::download_error(
                url,
                format!("server returned status code {}", response.status()),
            ));
        }

        if let Some(length) = response.content_length() {
            validate_download_size(length, &redact_query(url), self.max_size)?;
        }

        match self.write_body(response, url, destination).await {
            Ok(written) => Ok(written),
            Err(e) => {
                // Leave no truncated report behind
                let _ = tokio::fs::remove_file(destination).await;
                Err(e)
            }
        }
    }
}
