// SPDX-License-Identifier: MPL-2.0
//! Search filtering over the catalog.
//!
//! The visible set is recomputed synchronously whenever the search term or
//! the catalog changes. An empty term yields the whole catalog; otherwise a
//! record stays visible when the term is a case-insensitive substring of its
//! title or its filename. Catalog order is always preserved.

use super::ImageRecord;

/// Computes the visible subset of `catalog` for `term`.
pub fn visible_records(catalog: &[ImageRecord], term: &str) -> Vec<ImageRecord> {
    if term.is_empty() {
        return catalog.to_vec();
    }

    let needle = term.to_lowercase();
    catalog
        .iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle)
                || record.filename.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, filename: &str) -> ImageRecord {
        ImageRecord {
            id,
            src: format!("/images/{}", filename),
            title: crate::catalog::display_title(filename),
            filename: filename.to_string(),
            size: "Unknown".to_string(),
            date: "Unknown".to_string(),
        }
    }

    fn sample_catalog() -> Vec<ImageRecord> {
        vec![
            record(1, "anicat.png"),
            record(2, "anisigned.png"),
            record(3, "Catmessiahniko.jpg"),
        ]
    }

    #[test]
    fn empty_term_yields_whole_catalog() {
        let catalog = sample_catalog();
        assert_eq!(visible_records(&catalog, ""), catalog);
    }

    #[test]
    fn term_matches_title_or_filename_case_insensitively() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, "cat");

        let filenames: Vec<&str> = visible.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(filenames, vec!["anicat.png", "Catmessiahniko.jpg"]);
    }

    #[test]
    fn uppercase_term_matches_lowercase_filename() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, "ANICAT");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].filename, "anicat.png");
    }

    #[test]
    fn order_is_preserved_from_catalog() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, "ani");
        let ids: Vec<u32> = visible.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn unmatched_term_yields_empty_set() {
        let catalog = sample_catalog();
        assert!(visible_records(&catalog, "zebra").is_empty());
    }

    #[test]
    fn filename_extension_is_searchable() {
        let catalog = sample_catalog();
        let visible = visible_records(&catalog, ".jpg");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 3);
    }
}
