//! Batch compression into a single zip archive.
//!
//! A batch is all-or-nothing: the first rejected or undecodable file aborts
//! the whole request and no archive is produced.
//!
//! # Examples
//!
//! ```ignore
//! use image_utils_core::{compress_batch, CompressOptions, ImageInput};
//!
//! let inputs = vec![ImageInput::new("photo.png", std::fs::read("photo.png").unwrap())];
//! let batch = compress_batch(&inputs, &CompressOptions::default()).unwrap();
//! std::fs::write("compressed_images.zip", &batch.archive_bytes).unwrap();
//! println!("{}", batch.summary());
//! ```

mod archive;

pub use archive::ArchiveWriter;

use thiserror::Error;
use tracing::{info, warn};

use crate::compress::{compress_image, CompressError, CompressionResult};
use crate::decode::DecodeError;
use crate::encode::EncodeError;
use crate::naming::{has_supported_extension, UniqueNames};
use crate::options::CompressOptions;
use crate::summary::SizeSummary;
use crate::ImageInput;

/// Download name for the batch archive.
pub const ARCHIVE_FILENAME: &str = "compressed_images.zip";

/// Errors that abort a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// No inputs were supplied.
    #[error("No images supplied")]
    EmptyInput,

    /// A filename does not end in .png, .jpg or .jpeg.
    #[error("Unsupported file format for {0}. Please upload only PNG, JPG, or JPEG images.")]
    UnsupportedFormat(String),

    #[error("Could not decode {filename}: {source}")]
    Decode {
        filename: String,
        #[source]
        source: DecodeError,
    },

    #[error("Could not encode {filename}: {source}")]
    Encode {
        filename: String,
        #[source]
        source: EncodeError,
    },

    /// Writing the zip container failed.
    #[error("Archive error: {0}")]
    Archive(String),
}

impl BatchError {
    fn from_compress(filename: &str, err: CompressError) -> Self {
        let filename = filename.to_string();
        match err {
            CompressError::Decode(source) => BatchError::Decode { filename, source },
            CompressError::Encode(source) => BatchError::Encode { filename, source },
        }
    }
}

/// Output of a successful batch.
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// One result per input, in input order.
    pub items: Vec<CompressionResult>,
    /// Zip archive holding every item under its `output_filename`.
    pub archive_bytes: Vec<u8>,
    pub total_original_size_bytes: u64,
    pub total_compressed_size_bytes: u64,
}

impl BatchResult {
    pub fn summary(&self) -> SizeSummary {
        SizeSummary {
            total_original_size_bytes: self.total_original_size_bytes,
            total_compressed_size_bytes: self.total_compressed_size_bytes,
        }
    }

    /// See [`SizeSummary::reduction_percent`].
    pub fn reduction_percent(&self) -> Option<f64> {
        self.summary().reduction_percent()
    }
}

/// Compress every input to JPEG and pack the results into one zip archive.
///
/// Inputs are processed in order with a shared quality. Each input must have
/// a `.png`, `.jpg` or `.jpeg` filename (any case). Two inputs that map to the
/// same output name get numbered variants (`a_compressed_1.jpg`) so that each
/// item keeps its own archive entry.
///
/// # Errors
///
/// * `BatchError::EmptyInput` if `inputs` is empty
/// * `BatchError::UnsupportedFormat` naming the first file with a rejected extension
/// * `BatchError::Decode` / `BatchError::Encode` naming the first file that fails
/// * `BatchError::Archive` if the zip writer fails
#[tracing::instrument(skip_all, fields(count = inputs.len(), quality = options.quality))]
pub fn compress_batch(
    inputs: &[ImageInput],
    options: &CompressOptions,
) -> Result<BatchResult, BatchError> {
    if inputs.is_empty() {
        return Err(BatchError::EmptyInput);
    }

    let mut archive = ArchiveWriter::new();
    let mut names = UniqueNames::new();
    let mut items = Vec::with_capacity(inputs.len());
    let mut total_original_size_bytes = 0u64;
    let mut total_compressed_size_bytes = 0u64;

    for input in inputs {
        if !has_supported_extension(&input.filename) {
            warn!(filename = %input.filename, "rejecting batch: unsupported extension");
            return Err(BatchError::UnsupportedFormat(input.filename.clone()));
        }

        let mut item = compress_image(input, options.quality)
            .map_err(|e| BatchError::from_compress(&input.filename, e))?;

        let unique = names.claim(item.output_filename.clone());
        if unique != item.output_filename {
            warn!(
                filename = %input.filename,
                wanted = %item.output_filename,
                used = %unique,
                "output name already taken"
            );
            item.output_filename = unique;
        }

        archive.add(&item.output_filename, &item.encoded_bytes)?;
        total_original_size_bytes += item.original_size_bytes;
        total_compressed_size_bytes += item.compressed_size_bytes;
        items.push(item);
    }

    let archive_bytes = archive.finish()?;

    info!(
        items = items.len(),
        original = total_original_size_bytes,
        compressed = total_compressed_size_bytes,
        archive = archive_bytes.len(),
        "batch compressed"
    );

    Ok(BatchResult {
        items,
        archive_bytes,
        total_original_size_bytes,
        total_compressed_size_bytes,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
