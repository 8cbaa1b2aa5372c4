// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests over the public catalog/filter/lightbox API, plus the
//! config round trip.

use iced_gallery::catalog::{display_title, visible_records, ImageRecord};
use iced_gallery::config::{self, Config, ViewMode};
use iced_gallery::lightbox::{Direction, Lightbox};
use tempfile::tempdir;

fn record(id: u32, filename: &str) -> ImageRecord {
    ImageRecord {
        id,
        src: format!("http://host/images/{}", filename),
        title: display_title(filename),
        filename: filename.to_string(),
        size: "Unknown".to_string(),
        date: "2024-01-01".to_string(),
    }
}

fn catalog() -> Vec<ImageRecord> {
    vec![
        record(1, "anicat.png"),
        record(2, "anisigned.png"),
        record(3, "Catmessiahniko.jpg"),
        record(4, "gobbler_valis_and_arc.jpg"),
    ]
}

/// Drives one complete transition the way the update loop does: request,
/// fade timer, settle timer.
fn navigate(lightbox: &mut Lightbox, direction: Direction, visible: &[ImageRecord]) {
    if lightbox.request(direction) {
        lightbox.advance(visible);
        lightbox.finish();
    }
}

#[test]
fn test_search_then_keyboard_walk() {
    let catalog = catalog();

    // Searching "ani" narrows the visible set to the first two records.
    let visible = visible_records(&catalog, "ani");
    let filenames: Vec<&str> = visible.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(filenames, vec!["anicat.png", "anisigned.png"]);

    // Open the first match, walk right twice: second image, then wrap.
    let mut lightbox = Lightbox::default();
    lightbox.open(visible[0].id);

    navigate(&mut lightbox, Direction::Next, &visible);
    assert_eq!(lightbox.selection(), Some(2));

    navigate(&mut lightbox, Direction::Next, &visible);
    assert_eq!(lightbox.selection(), Some(1));
}

#[test]
fn test_narrowing_search_closes_open_modal() {
    let catalog = catalog();
    let mut lightbox = Lightbox::default();

    let visible = visible_records(&catalog, "");
    lightbox.open(visible[3].id);

    // The user types a term that filters out the open record.
    let narrowed = visible_records(&catalog, "ani");
    lightbox.sync_with_visible(&narrowed);
    assert_eq!(lightbox.selection(), None);
}

#[test]
fn test_escape_during_transition_closes() {
    let catalog = catalog();
    let visible = visible_records(&catalog, "");

    let mut lightbox = Lightbox::default();
    lightbox.open(1);
    assert!(lightbox.request(Direction::Previous));

    lightbox.close();
    lightbox.advance(&visible);
    lightbox.finish();
    assert_eq!(lightbox, Lightbox::Closed);
}

#[test]
fn test_view_mode_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("gallery.toml");

    // 1. Initial config: grid view
    let initial_config = Config {
        base_url: "http://host/images".to_string(),
        images: vec!["anicat.png".to_string()],
        view_mode: Some(ViewMode::Grid),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    assert_eq!(loaded.view_mode, Some(ViewMode::Grid));

    // 2. Change config to list view
    let list_config = Config {
        view_mode: Some(ViewMode::List),
        ..initial_config
    };
    config::save_to_path(&list_config, &temp_config_file_path)
        .expect("Failed to write list config file");

    let reloaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load list config from path");
    assert_eq!(reloaded.view_mode, Some(ViewMode::List));
    assert_eq!(reloaded.images, vec!["anicat.png".to_string()]);

    dir.close().expect("Failed to close temporary directory");
}
