// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::catalog::ImageRecord;
use crate::error::Error;
use crate::ui::gallery;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// gallery view messages while keeping a single update entrypoint for the
/// async results and transition timers.
#[derive(Debug, Clone)]
pub enum Message {
    /// A gallery view emitted a message.
    Gallery(gallery::Message),
    /// The startup catalog load finished.
    CatalogLoaded(Result<Vec<ImageRecord>, Error>),
    /// An image byte fetch finished for the given record.
    ThumbnailFetched {
        id: u32,
        result: Result<Vec<u8>, Error>,
    },
    /// The fade phase of a lightbox transition elapsed.
    TransitionFaded,
    /// The settle phase of a lightbox transition elapsed.
    TransitionSettled,
    /// The download dialog/fetch sequence finished. `Ok(None)` means the
    /// user cancelled the dialog.
    DownloadFinished(Result<Option<PathBuf>, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a `gallery.toml` other than the default location.
    pub config_path: Option<String>,
    /// Optional base URL override for the configured image list.
    pub base_url: Option<String>,
}
