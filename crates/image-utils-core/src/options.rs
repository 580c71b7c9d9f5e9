//! Caller-supplied settings for the compression and document transforms.

use serde::{Deserialize, Serialize};

/// Default JPEG quality for compression.
pub const DEFAULT_QUALITY: u8 = 85;

/// Default page resolution in dots per inch.
pub const DEFAULT_RESOLUTION: f32 = 100.0;

/// Default JPEG quality for images embedded in document pages.
pub const DEFAULT_PAGE_IMAGE_QUALITY: u8 = 75;

/// Settings for batch compression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressOptions {
    /// JPEG quality (1 to 100)
    pub quality: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
        }
    }
}

impl CompressOptions {
    pub fn with_quality(quality: u8) -> Self {
        Self { quality }
    }
}

/// Settings for document composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Dots per inch used to size pages from image pixels
    pub resolution: f32,
    /// JPEG quality of the page images (1 to 100)
    pub image_quality: u8,
    /// Document title written to the info dictionary
    pub title: Option<String>,
    /// Document author written to the info dictionary
    pub author: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            image_quality: DEFAULT_PAGE_IMAGE_QUALITY,
            title: None,
            author: None,
        }
    }
}

impl DocumentOptions {
    /// Page size in points for an image of the given pixel size.
    ///
    /// Non-positive or non-finite resolutions fall back to the default.
    pub fn page_size(&self, width: u32, height: u32) -> (f32, f32) {
        let dpi = if self.resolution.is_finite() && self.resolution > 0.0 {
            self.resolution
        } else {
            DEFAULT_RESOLUTION
        };
        let scale = 72.0 / dpi;
        (width as f32 * scale, height as f32 * scale)
    }
}
