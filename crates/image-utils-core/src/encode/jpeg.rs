//! JPEG encoding for compression output.
//!
//! Output is baseline JPEG with optimized Huffman tables, written by the
//! `jpeg-encoder` crate.

use jpeg_encoder::{ColorType, Encoder};
use thiserror::Error;

use crate::decode::{ColorMode, DecodedImage};

/// Largest edge a baseline JPEG frame header can describe.
pub const MAX_JPEG_DIMENSION: u32 = u16::MAX as u32;

/// Reasons an image could not be written as JPEG.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Buffer length disagrees with `width * height * channels`
    #[error("Pixel buffer holds {actual} bytes, image needs {expected}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero or exceeds the JPEG limit
    #[error("Invalid dimensions: {width}x{height} (each side must be 1..=65535)")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder has no JPEG representation for this channel layout
    #[error("Cannot write {0:?} pixels as JPEG")]
    UnsupportedColorMode(ColorMode),

    #[error("JPEG writer failed: {0}")]
    EncodingFailed(String),
}

/// Encode a decoded image to JPEG bytes.
///
/// Gray images are written as single-channel JPEG, RGB images as YCbCr.
/// Images with an alpha channel must be normalized first.
///
/// `quality` runs from 1 (smallest file) to 100 (best fidelity); values
/// outside that range are clamped. The upload form defaults to 85 and PDF
/// pages use 75.
pub fn encode_jpeg(image: &DecodedImage, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = (image.width, image.height);

    if width == 0 || height == 0 || width > MAX_JPEG_DIMENSION || height > MAX_JPEG_DIMENSION {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let color_type = match image.mode {
        ColorMode::Luma => ColorType::Luma,
        ColorMode::Rgb => ColorType::Rgb,
        mode => return Err(EncodeError::UnsupportedColorMode(mode)),
    };

    let expected_len = width as usize * height as usize * image.mode.channels();
    if image.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: image.pixels.len(),
        });
    }

    // The encoder's quantization scaling is only defined on 1..=100
    let quality = quality.clamp(1, 100);

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality);
    encoder.set_optimized_huffman_tables(true);

    encoder
        .encode(&image.pixels, width as u16, height as u16, color_type)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}
