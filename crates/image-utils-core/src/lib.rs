//! image-utils core: image compression and image-to-PDF transforms.
//!
//! This crate holds the two stateless transforms behind the image-utils
//! tools:
//!
//! - [`compress_batch`] re-encodes PNG/JPEG uploads as quality-controlled
//!   JPEGs, packs them into one zip archive and reports size savings.
//! - [`compose_document`] turns a list of images into a multi-page PDF,
//!   one page per image.
//!
//! Both take an ordered list of [`ImageInput`]s and fail as a whole: no
//! partial archive or document is ever returned.

pub mod batch;
pub mod compress;
pub mod data_url;
pub mod decode;
pub mod document;
pub mod encode;
pub mod naming;
pub mod options;
pub mod summary;

#[cfg(test)]
mod test_helpers;

pub use batch::{compress_batch, BatchError, BatchResult, ARCHIVE_FILENAME};
pub use compress::{compress_image, CompressError, CompressionResult};
pub use document::{compose_document, DocumentError, DocumentResult, DOCUMENT_FILENAME};
pub use options::{CompressOptions, DocumentOptions};
pub use summary::{format_kb, SizeSummary};

/// A named, still-encoded image supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    /// Original filename, used for extension checks and output naming.
    pub filename: String,
    /// Encoded file contents.
    pub bytes: Vec<u8>,
}

impl ImageInput {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Build an input from a `data:<mime>;base64,` URL as produced by
    /// browser file readers.
    pub fn from_data_url(
        filename: impl Into<String>,
        url: &str,
    ) -> Result<Self, data_url::DataUrlError> {
        let filename = filename.into();
        let parsed = data_url::parse_data_url(url)?;
        tracing::debug!(
            filename = %filename,
            mime = %parsed.mime,
            bytes = parsed.bytes.len(),
            "read data URL upload"
        );
        Ok(Self::new(filename, parsed.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_input_new() {
        let input = ImageInput::new("a.png", vec![1u8, 2, 3]);
        assert_eq!(input.filename, "a.png");
        assert_eq!(input.bytes, vec![1, 2, 3]);
    }

    #[test]
    fn test_image_input_from_data_url() {
        let input = ImageInput::from_data_url("a.png", "data:image/png;base64,AAEC").unwrap();
        assert_eq!(input.filename, "a.png");
        assert_eq!(input.bytes, vec![0, 1, 2]);
    }

    #[test]
    fn test_image_input_from_bad_data_url() {
        assert!(ImageInput::from_data_url("a.png", "AAEC").is_err());
    }

    #[test]
    fn test_data_url_input_compresses() {
        let png = test_helpers::png_input("photo.png", 16, 16);
        let url = data_url::to_data_url("image/png", &png.bytes);

        let input = ImageInput::from_data_url("photo.png", &url).unwrap();
        let batch = compress_batch(&[input], &CompressOptions::default()).unwrap();
        assert_eq!(batch.items[0].output_filename, "photo_compressed.jpg");
    }

    #[test]
    fn test_data_url_mime_does_not_pick_decoder() {
        // PNG bytes labelled as JPEG still decode as PNG
        let png = test_helpers::png_input("photo.png", 8, 8);
        let url = data_url::to_data_url("image/jpeg", &png.bytes);

        let input = ImageInput::from_data_url("photo.png", &url).unwrap();
        assert_eq!(input.bytes, png.bytes);
        assert!(compress_batch(&[input], &CompressOptions::default()).is_ok());
    }

    #[test]
    fn test_public_types_are_send() {
        fn assert_send<T: Send>() {}
        assert_send::<ImageInput>();
        assert_send::<BatchResult>();
        assert_send::<DocumentResult>();
        assert_send::<BatchError>();
        assert_send::<DocumentError>();
    }
}
