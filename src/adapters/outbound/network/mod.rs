/// Network adapters for report downloads
mod report_downloader;

pub use report_downloader::HttpReportDownloader;
