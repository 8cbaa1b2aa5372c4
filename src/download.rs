// SPDX-License-Identifier: MPL-2.0
//! Saving the currently open image to disk.
//!
//! The desktop counterpart of a browser download: an async save dialog
//! pre-filled with the derived filename, then a plain GET written to the
//! chosen path. Failures only ever surface as a console diagnostic.

use crate::catalog::{download_filename, ImageRecord};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Fetches `url` and writes the body to `dest`.
pub async fn download_to(url: &str, dest: &Path) -> Result<()> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "GET {} returned {}",
            url,
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    tokio::fs::write(dest, &bytes).await?;
    Ok(())
}

/// Prompts for a destination and downloads `record` there.
///
/// Returns the saved path, or `None` when the user cancelled the dialog.
pub async fn save_with_dialog(record: ImageRecord) -> Result<Option<PathBuf>> {
    let mut dialog = rfd::AsyncFileDialog::new()
        .set_title("Save Image As")
        .set_file_name(download_filename(&record.title));
    if let Some(downloads) = dirs::download_dir() {
        dialog = dialog.set_directory(downloads);
    }

    let Some(handle) = dialog.save_file().await else {
        return Ok(None);
    };

    let dest = handle.path().to_path_buf();
    download_to(&record.src, &dest).await?;
    Ok(Some(dest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn download_to_reports_unreachable_host() {
        let dir = tempdir().expect("failed to create temp dir");
        let dest = dir.path().join("anicat.jpg");

        let result = download_to("http://127.0.0.1:9/anicat.png", &dest).await;
        assert!(matches!(result, Err(Error::Http(_))));
        assert!(!dest.exists());
    }
}
