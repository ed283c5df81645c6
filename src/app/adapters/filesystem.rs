//! Filesystem access for calibration logs

use crate::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Read a log file from disk into memory
///
/// The whole file is loaded; logs are evaluated as a single document.
pub async fn read_log_file(path: &Path) -> Result<Vec<u8>> {
    if !path.exists() {
        return Err(Error::io(
            format!("Log file not found: {}", path.display()),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::io(format!("Failed to read log file '{}'", path.display()), e))?;

    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// File name used to label a log in messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
