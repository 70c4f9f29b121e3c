use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ReportDownloader port for fetching a finished report
///
/// This port abstracts the transfer of the report file behind its
/// pre-signed URL to a local path.
#[async_trait]
pub trait ReportDownloader: Send + Sync {
    /// Downloads the content behind `url` into `destination`
    ///
    /// # Returns
    /// Number of bytes written
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request fails or returns a non-success status
    /// - The destination cannot be written
    async fn download(&self, url: &str, destination: &Path) -> Result<u64>;
}
