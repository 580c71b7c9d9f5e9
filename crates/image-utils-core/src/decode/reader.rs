//! Content-sniffed image decoding.

use std::io::Cursor;

use image::{ImageError, ImageReader};

use super::{normalize, DecodeError, DecodedImage};

/// Decode an encoded image from bytes.
///
/// The container format is guessed from the leading bytes, never from a
/// filename. Any 16-bit or float buffer is narrowed to 8 bits per channel;
/// the channel layout (gray/RGB, with or without alpha) is preserved.
///
/// # Errors
///
/// Returns `DecodeError::Empty` for an empty buffer,
/// `DecodeError::UnsupportedFormat` when the format cannot be recognized and
/// `DecodeError::CorruptedFile` when the data is truncated or malformed.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::UnsupportedFormat(
            "format not recognized".to_string(),
        ));
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(inner) => DecodeError::UnsupportedFormat(inner.to_string()),
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    Ok(DecodedImage::from_dynamic(img))
}

/// Decode bytes and normalize the result for lossy re-encoding.
pub fn decode_normalized(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    decode_image(bytes).map(normalize)
}
