//! Image encoding pipeline.
//!
//! This module provides functionality for:
//! - Encoding normalized images to JPEG with configurable quality
//!
//! # Examples
//!
//! ```ignore
//! use image_utils_core::decode::{ColorMode, DecodedImage};
//! use image_utils_core::encode::encode_jpeg;
//!
//! let image = DecodedImage::new(100, 100, ColorMode::Rgb, vec![128u8; 100 * 100 * 3]);
//! let jpeg_bytes = encode_jpeg(&image, 85).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, MAX_JPEG_DIMENSION};
