// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `gallery.toml` file.
//!
//! The image catalog itself is part of the configuration: `base_url` names the
//! path prefix images are served from and `images` lists the filenames to
//! display, in display order. There is no baked-in fallback list; an empty
//! `images` array simply produces an empty gallery.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.view_mode = Some(config::ViewMode::List);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "gallery.toml";
const APP_NAME: &str = "IcedGallery";

/// How the visible set is laid out on the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Responsive grid of square thumbnails.
    #[default]
    Grid,
    /// Vertical list of rows with full metadata.
    List,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path prefix the configured images are fetched from.
    pub base_url: String,
    /// Filenames to display, in catalog order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Preferred layout for the main screen.
    #[serde(default)]
    pub view_mode: Option<ViewMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_BASE_URL.to_string(),
            images: Vec::new(),
            view_mode: Some(ViewMode::Grid),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_catalog() {
        let config = Config {
            base_url: "https://example.net/images".to_string(),
            images: vec!["anicat.png".to_string(), "anisigned.png".to_string()],
            view_mode: Some(ViewMode::List),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("gallery.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.base_url, config.base_url);
        assert_eq!(loaded.images, config.images);
        assert_eq!(loaded.view_mode, config.view_mode);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("gallery.toml");
        fs::write(&config_path, "this is { not toml").expect("failed to write file");

        let loaded = load_from_path(&config_path).expect("load should not fail");
        assert_eq!(loaded.base_url, defaults::DEFAULT_BASE_URL);
        assert!(loaded.images.is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("gallery.toml");
        fs::write(&config_path, "base_url = \"http://host/pics\"\n").expect("write failed");

        let loaded = load_from_path(&config_path).expect("load failed");
        assert_eq!(loaded.base_url, "http://host/pics");
        assert!(loaded.images.is_empty());
        assert_eq!(loaded.view_mode, None);
    }

    #[test]
    fn view_mode_serializes_as_kebab_case() {
        let config = Config {
            view_mode: Some(ViewMode::Grid),
            ..Config::default()
        };
        let serialized = toml::to_string(&config).expect("serialize failed");
        assert!(serialized.contains("view_mode = \"grid\""));
    }
}
