//! Multi-page PDF composition from a list of images.
//!
//! Every input becomes one page, in input order. Pages are sized from the
//! image's pixel dimensions at the configured resolution (100 dpi by
//! default), and each page image is embedded as a JPEG stream.
//!
//! # Examples
//!
//! ```ignore
//! use image_utils_core::{compose_document, DocumentOptions, ImageInput};
//!
//! let inputs = vec![
//!     ImageInput::new("page1.png", std::fs::read("page1.png").unwrap()),
//!     ImageInput::new("page2.jpg", std::fs::read("page2.jpg").unwrap()),
//! ];
//! let doc = compose_document(&inputs, &DocumentOptions::default()).unwrap();
//! std::fs::write("converted_images.pdf", &doc.document_bytes).unwrap();
//! ```

mod pdf;

pub use pdf::PdfWriter;

use thiserror::Error;
use tracing::{debug, info};

use crate::decode::{decode_normalized, DecodeError};
use crate::encode::{encode_jpeg, EncodeError};
use crate::options::DocumentOptions;
use crate::ImageInput;

/// Download name for the composed document.
pub const DOCUMENT_FILENAME: &str = "converted_images.pdf";

/// Errors that abort document composition.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No inputs were supplied.
    #[error("No images supplied")]
    EmptyInput,

    #[error("Could not decode {filename}: {source}")]
    Decode {
        filename: String,
        #[source]
        source: DecodeError,
    },

    #[error("Could not encode page image for {filename}: {source}")]
    Encode {
        filename: String,
        #[source]
        source: EncodeError,
    },

    /// Building or serializing the PDF failed.
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// A composed PDF.
#[derive(Debug, Clone)]
pub struct DocumentResult {
    pub document_bytes: Vec<u8>,
    /// Equals the number of inputs.
    pub page_count: usize,
}

/// Compose one PDF with a page per input image, in input order.
///
/// Filenames are not checked; any format the decoder recognizes is accepted.
/// All inputs are decoded before the first page is written, so a bad input
/// never yields a partial document.
///
/// # Errors
///
/// * `DocumentError::EmptyInput` if `inputs` is empty
/// * `DocumentError::Decode` naming the first input that fails to decode
/// * `DocumentError::Encode` if a page image cannot be written as JPEG
/// * `DocumentError::Pdf` if serialization fails
#[tracing::instrument(skip_all, fields(count = inputs.len()))]
pub fn compose_document(
    inputs: &[ImageInput],
    options: &DocumentOptions,
) -> Result<DocumentResult, DocumentError> {
    if inputs.is_empty() {
        return Err(DocumentError::EmptyInput);
    }

    let images = inputs
        .iter()
        .map(|input| {
            decode_normalized(&input.bytes).map_err(|source| DocumentError::Decode {
                filename: input.filename.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut writer = PdfWriter::new();
    for (input, image) in inputs.iter().zip(&images) {
        let jpeg = encode_jpeg(image, options.image_quality).map_err(|source| {
            DocumentError::Encode {
                filename: input.filename.clone(),
                source,
            }
        })?;
        let (width_pt, height_pt) = options.page_size(image.width, image.height);

        debug!(
            filename = %input.filename,
            width = image.width,
            height = image.height,
            width_pt,
            height_pt,
            "adding page"
        );
        writer.add_image_page(image, jpeg, width_pt, height_pt)?;
    }

    let page_count = writer.page_count();
    let document_bytes = writer.finish(options.title.as_deref(), options.author.as_deref())?;

    info!(pages = page_count, bytes = document_bytes.len(), "document composed");

    Ok(DocumentResult {
        document_bytes,
        page_count,
    })
}
