use async_trait::async_trait;
use audit_report::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const FAKE_PDF: &[u8] = b"%PDF-1.4\n%mock report\n";

/// Mock ReportDownloader writing a small fake PDF to the destination
#[derive(Default, Clone)]
pub struct MockReportDownloader {
    downloads: Arc<Mutex<Vec<(String, PathBuf)>>>,
    fail: bool,
}

impl MockReportDownloader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn downloads(&self) -> Vec<(String, PathBuf)> {
        self.downloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportDownloader for MockReportDownloader {
    async fn download(&self, url: &str, destination: &Path) -> Result<u64> {
        self.downloads
            .lock()
            .unwrap()
            .push((url.to_string(), destination.to_path_buf()));

        if self.fail {
            return Err(AuditReportError::DownloadFailed {
                url: url.to_string(),
                details: "connection reset".to_string(),
            }
            .into());
        }

        std::fs::write(destination, FAKE_PDF)?;
        Ok(FAKE_PDF.len() as u64)
    }
}
