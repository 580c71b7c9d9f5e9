//! Image decoding and normalization.
//!
//! This module provides functionality for:
//! - Decoding PNG, JPEG, GIF, BMP, TIFF and WebP images from memory
//! - Narrowing decoded buffers to 8 bits per channel
//! - Dropping alpha channels ahead of JPEG re-encoding
//!
//! All operations are synchronous and operate on caller-owned buffers.
//!
//! # Examples
//!
//! ```ignore
//! use image_utils_core::decode::decode_normalized;
//!
//! let bytes = std::fs::read("logo.png").unwrap();
//! let image = decode_normalized(&bytes).unwrap();
//! println!("Decoded {}x{} {:?} image", image.width, image.height, image.mode);
//! ```

mod normalize;
mod reader;
mod types;

pub use normalize::normalize;
pub use reader::{decode_image, decode_normalized};
pub use types::{ColorMode, DecodeError, DecodedImage};
