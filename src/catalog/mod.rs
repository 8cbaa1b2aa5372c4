// SPDX-License-Identifier: MPL-2.0
//! Image catalog types and filename-to-title derivation.
//!
//! The catalog is the full ordered set of displayable images, built once at
//! startup from the configured filename list. Records are plain immutable
//! values; the search-filtered subset ("visible set") always preserves
//! catalog order.

mod filter;
pub mod loader;

pub use filter::visible_records;

/// One displayable image, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Dense 1-based id, stable for the lifetime of the load.
    pub id: u32,
    /// Full URL the image is fetched from.
    pub src: String,
    /// Display title derived from the filename.
    pub title: String,
    /// Original filename as configured.
    pub filename: String,
    /// Human-readable size ("N KB" or "Unknown").
    pub size: String,
    /// Formatted last-modified date, or today's date when unknown.
    pub date: String,
}

/// Derives a display title from a filename: strips the extension, replaces
/// `-`/`_` separators with spaces, and capitalizes the first letter of each
/// word. The derivation is idempotent on already-derived titles.
pub fn display_title(filename: &str) -> String {
    let stem = strip_extension(filename);
    let spaced = stem.replace(['-', '_'], " ");

    let mut title = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            title.push(c);
        } else if at_word_start {
            title.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            title.push(c);
        }
    }
    title
}

/// Derives the suggested save-as filename for a download: spaces replaced
/// with underscores, lowercased, with a `.jpg` suffix appended regardless of
/// the actual format (a cosmetic inaccuracy kept from the download contract).
pub fn download_filename(title: &str) -> String {
    let mut name = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase();
    name.push_str(".jpg");
    name
}

/// Removes the final extension, mirroring the usual "everything after the
/// last dot" rule. Leading-dot names and trailing dots are left untouched.
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) if idx > 0 && idx + 1 < filename.len() => &filename[..idx],
        _ => filename,
    }
}
