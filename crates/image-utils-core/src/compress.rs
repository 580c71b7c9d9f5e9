//! Single-image compression: decode, normalize, re-encode as JPEG.

use thiserror::Error;
use tracing::debug;

use crate::data_url::to_data_url;
use crate::decode::{decode_normalized, DecodeError};
use crate::encode::{encode_jpeg, EncodeError};
use crate::naming::output_filename;
use crate::ImageInput;

/// Errors from compressing one image.
#[derive(Debug, Error)]
pub enum CompressError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A compressed image with its size accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressionResult {
    /// JPEG bytes.
    pub encoded_bytes: Vec<u8>,
    /// Length of the input's encoded bytes.
    pub original_size_bytes: u64,
    /// Always `encoded_bytes.len()`.
    pub compressed_size_bytes: u64,
    /// Archive entry / download name, e.g. `photo_compressed.jpg`.
    pub output_filename: String,
}

impl CompressionResult {
    fn new(encoded_bytes: Vec<u8>, original_size_bytes: u64, output_filename: String) -> Self {
        Self {
            compressed_size_bytes: encoded_bytes.len() as u64,
            encoded_bytes,
            original_size_bytes,
            output_filename,
        }
    }

    /// The compressed JPEG as a `data:image/jpeg;base64,` URL.
    pub fn to_data_url(&self) -> String {
        to_data_url("image/jpeg", &self.encoded_bytes)
    }
}

/// Compress one image to JPEG at `quality`.
///
/// The output filename is derived from the input filename without checking
/// its extension; extension filtering is the batch aggregator's job.
pub fn compress_image(
    input: &ImageInput,
    quality: u8,
) -> Result<CompressionResult, CompressError> {
    let image = decode_normalized(&input.bytes)?;
    let encoded = encode_jpeg(&image, quality)?;

    let result = CompressionResult::new(
        encoded,
        input.bytes.len() as u64,
        output_filename(&input.filename),
    );

    debug!(
        filename = %input.filename,
        width = image.width,
        height = image.height,
        original = result.original_size_bytes,
        compressed = result.compressed_size_bytes,
        "compressed image"
    );

    Ok(result)
}
