// SPDX-License-Identifier: MPL-2.0
//! Catalog loading and per-image metadata probes.
//!
//! Loading runs once at startup. Every configured filename produces exactly
//! one record: a `HEAD` request supplies `content-length` and `last-modified`
//! when the server answers, and a failed probe degrades to placeholder
//! values instead of dropping the entry. There are no retries and no
//! cancellation; a probe that resolves after interest has moved on only ever
//! populates the catalog being built.

use crate::catalog::{display_title, ImageRecord};
use crate::error::{Error, Result};
use chrono::{DateTime, Local};

/// Size/date pair extracted from a metadata probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeInfo {
    pub size: String,
    pub date: String,
}

impl ProbeInfo {
    /// Placeholder used when a probe fails: size unknown, date today.
    fn unknown() -> Self {
        Self {
            size: "Unknown".to_string(),
            date: Local::now().format(DATE_FORMAT).to_string(),
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders a `content-length` value as a rounded kilobyte string.
pub fn format_size(content_length: Option<u64>) -> String {
    match content_length {
        Some(bytes) => format!("{} KB", (bytes + 512) / 1024),
        None => "Unknown".to_string(),
    }
}

/// Renders a `last-modified` header as a short date, falling back to today's
/// date when the header is missing or unparsable.
pub fn format_date(last_modified: Option<&str>) -> String {
    last_modified
        .and_then(|value| DateTime::parse_from_rfc2822(value).ok())
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string())
}

/// Joins the configured base URL with a filename.
pub fn image_url(base_url: &str, filename: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), filename)
}

/// Issues one header-only probe against `url`.
///
/// Probe failure is non-fatal and purely cosmetic: network errors and non-OK
/// responses both yield placeholder values after a one-line diagnostic.
pub async fn probe(client: &reqwest::Client, url: &str) -> ProbeInfo {
    match client.head(url).send().await {
        Ok(response) if response.status().is_success() => {
            let content_length = response
                .headers()
                .get(reqwest::header::CONTENT_LENGTH)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse::<u64>().ok());
            let last_modified = response
                .headers()
                .get(reqwest::header::LAST_MODIFIED)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string);

            ProbeInfo {
                size: format_size(content_length),
                date: format_date(last_modified.as_deref()),
            }
        }
        Ok(response) => {
            eprintln!("Metadata probe for {} returned {}", url, response.status());
            ProbeInfo::unknown()
        }
        Err(err) => {
            eprintln!("Metadata probe for {} failed: {}", url, err);
            ProbeInfo::unknown()
        }
    }
}

/// Builds the catalog from the configured filename list.
///
/// Output order equals input order and ids are a dense 1-based sequence.
/// Only client construction can fail; per-file probes never remove an entry.
pub async fn load_catalog(base_url: String, filenames: Vec<String>) -> Result<Vec<ImageRecord>> {
    let client = reqwest::Client::builder().build()?;

    let mut records = Vec::with_capacity(filenames.len());
    for (index, filename) in filenames.into_iter().enumerate() {
        let src = image_url(&base_url, &filename);
        let info = probe(&client, &src).await;

        records.push(ImageRecord {
            id: index as u32 + 1,
            title: display_title(&filename),
            filename,
            src,
            size: info.size,
            date: info.date,
        });
    }

    Ok(records)
}

/// Fetches the raw bytes of an image for display.
///
/// Returns an error for network failures, non-OK responses, and payloads that
/// are not a recognizable image format; the caller renders a placeholder
/// glyph in all of those cases.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "GET {} returned {}",
            url,
            response.status()
        )));
    }

    let bytes = response.bytes().await?.to_vec();
    if image_rs::guess_format(&bytes).is_err() {
        return Err(Error::Http(format!("{} is not a recognized image", url)));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_size_rounds_to_kilobytes() {
        assert_eq!(format_size(Some(204_800)), "200 KB");
        assert_eq!(format_size(Some(1_000)), "1 KB");
        assert_eq!(format_size(Some(1_535)), "1 KB");
        // 1536 bytes is exactly 1.5 KB and rounds up
        assert_eq!(format_size(Some(1_536)), "2 KB");
    }

    #[test]
    fn format_size_without_header_is_unknown() {
        assert_eq!(format_size(None), "Unknown");
    }

    #[test]
    fn format_date_parses_rfc2822_header() {
        let formatted = format_date(Some("Wed, 21 Oct 2015 07:28:00 GMT"));
        assert_eq!(formatted, "2015-10-21");
    }

    #[test]
    fn format_date_falls_back_to_today_on_garbage() {
        let expected = Local::now().format(DATE_FORMAT).to_string();
        assert_eq!(format_date(Some("not a date")), expected);
        assert_eq!(format_date(None), expected);
    }

    #[test]
    fn image_url_joins_without_duplicate_slash() {
        assert_eq!(
            image_url("http://host/images/", "anicat.png"),
            "http://host/images/anicat.png"
        );
        assert_eq!(
            image_url("http://host/images", "anicat.png"),
            "http://host/images/anicat.png"
        );
    }

    #[tokio::test]
    async fn probe_failure_yields_placeholder_info() {
        let client = reqwest::Client::new();
        // Nothing listens on port 9; the connection is refused immediately.
        let info = probe(&client, "http://127.0.0.1:9/missing.png").await;

        assert_eq!(info.size, "Unknown");
        assert_eq!(info.date, Local::now().format(DATE_FORMAT).to_string());
    }

    #[tokio::test]
    async fn load_catalog_keeps_records_for_unreachable_files() {
        let records = load_catalog(
            "http://127.0.0.1:9/images".to_string(),
            vec!["anicat.png".to_string(), "anisigned.png".to_string()],
        )
        .await
        .expect("client construction should succeed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
        assert_eq!(records[0].title, "Anicat");
        assert_eq!(records[0].size, "Unknown");
        assert_eq!(records[1].filename, "anisigned.png");
    }
}
