use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a downloaded report (500 MB)
/// Reports larger than this are rejected instead of filling the disk
pub const MAX_REPORT_SIZE: u64 = 500 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` instead of `metadata()` to check the link
/// itself, not the target it points to. A missing path is accepted.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that the report output directory exists and is a real directory
///
/// # Errors
/// Returns an error if:
/// - The directory doesn't exist
/// - The path is a symbolic link
/// - The path is not a directory
pub fn validate_output_directory(dir: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(dir).map_err(|e| {
        anyhow::anyhow!(
            "Output directory {} is not accessible: {}",
            dir.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: Output directory {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            dir.display()
        );
    }

    if !metadata.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }

    Ok(())
}

/// Validates that a download stays within the size limit
///
/// # Arguments
/// * `received` - Bytes received so far (or the announced content length)
/// * `url` - Source URL, for the error message
/// * `max_size` - Maximum allowed size in bytes
pub fn validate_download_size(received: u64, url: &str, max_size: u64) -> Result<()> {
    if received > max_size {
        anyhow::bail!(
            "Security: Report at {} exceeds the maximum allowed size ({} bytes > {} bytes)",
            url,
            received,
            max_size
        );
    }
    Ok(())
}
