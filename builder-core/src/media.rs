//! Media library of images and videos usable as element backgrounds.
//!
//! Uploaded files are inlined as base64 data URLs; external media is kept as
//! a URL string. Nothing is fetched or verified beyond MIME type and file
//! extension sniffing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::element::BackgroundImage;
use crate::patch::ElementPatch;
use crate::{BuilderError, BuilderResult};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "ogg", "mov"];

/// Kind of media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Video clip.
    Video,
}

impl MediaKind {
    /// Classify a MIME type by its top-level type.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(Self::Image)
        } else if mime.starts_with("video/") {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Classify a URL by its file extension.
    #[must_use]
    pub fn from_url(url: &str) -> Option<Self> {
        let (_, extension) = url.rsplit_once('.')?;
        let extension = extension.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// One entry of the media library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique identifier.
    pub id: Uuid,
    /// Image or video.
    pub kind: MediaKind,
    /// Data URL or external URL.
    pub url: String,
    /// Display name (file name).
    pub name: String,
}

impl MediaItem {
    /// Build a media item from an uploaded file.
    ///
    /// Returns `None` if the MIME type is neither an image nor a video.
    #[must_use]
    pub fn from_upload(name: &str, mime: &str, bytes: &[u8]) -> Option<Self> {
        let kind = MediaKind::from_mime(mime)?;
        Some(Self {
            id: Uuid::new_v4(),
            kind,
            url: format!("data:{mime};base64,{}", STANDARD.encode(bytes)),
            name: name.to_string(),
        })
    }

    /// Build a media item referencing an external URL.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidMediaUrl`] if the URL does not end in a
    /// known image or video extension.
    pub fn from_external_url(url: &str) -> BuilderResult<Self> {
        let url = url.trim();
        let kind =
            MediaKind::from_url(url).ok_or_else(|| BuilderError::InvalidMediaUrl(url.to_string()))?;
        let name = url
            .rsplit('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or("External media");
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            url: url.to_string(),
            name: name.to_string(),
        })
    }

    /// Patch that sets this media as an element's covering background.
    #[must_use]
    pub fn background_patch(&self) -> ElementPatch {
        ElementPatch::background(BackgroundImage::cover(self.url.clone()))
    }
}

/// A file handed to [`MediaLibrary::upload`].
#[derive(Debug, Clone, Copy)]
pub struct UploadedFile<'a> {
    /// File name.
    pub name: &'a str,
    /// Declared MIME type.
    pub mime: &'a str,
    /// File contents.
    pub bytes: &'a [u8],
}

/// The session's media library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaLibrary {
    items: Vec<MediaItem>,
}

impl MediaLibrary {
    /// Create an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every uploaded image or video; other files are skipped.
    ///
    /// Returns the items that were added.
    pub fn upload(&mut self, files: &[UploadedFile<'_>]) -> Vec<MediaItem> {
        let added: Vec<MediaItem> = files
            .iter()
            .filter_map(|file| {
                let item = MediaItem::from_upload(file.name, file.mime, file.bytes);
                if item.is_none() {
                    tracing::debug!(
                        "Skipping unsupported media file {} ({})",
                        file.name,
                        file.mime
                    );
                }
                item
            })
            .collect();
        self.items.extend(added.iter().cloned());
        added
    }

    /// Add an external media URL.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidMediaUrl`] if the URL fails the extension check.
    pub fn add_external(&mut self, url: &str) -> BuilderResult<&MediaItem> {
        let item = MediaItem::from_external_url(url)?;
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// All items in upload order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
