//! image-utils WASM - WebAssembly bindings for image-utils
//!
//! This crate exposes the image-utils-core transforms to the browser
//! control panel.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types and upload conversions
//! - `compress` - Batch JPEG compression into a zip archive
//! - `document` - Image-to-PDF composition
//!
//! # Usage
//!
//! ```typescript
//! import init, { compress_batch } from '@image-utils/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const batch = compress_batch(names, bytes, 85);
//! console.log(`${batch.len} images, ${batch.reduction_percent?.toFixed(2)}% smaller`);
//! ```

use wasm_bindgen::prelude::*;

mod compress;
mod document;
mod types;

// Re-export public types
pub use compress::{compress_batch, compress_batch_data_urls};
pub use document::compose_document;
pub use types::JsBatchResult;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Suggested download name for the compressed-images archive.
#[wasm_bindgen]
pub fn archive_filename() -> String {
    image_utils_core::ARCHIVE_FILENAME.to_string()
}

/// Suggested download name for the composed PDF.
#[wasm_bindgen]
pub fn document_filename() -> String {
    image_utils_core::DOCUMENT_FILENAME.to_string()
}

/// Format a byte count as kilobytes, e.g. `"12.34 KB"`.
#[wasm_bindgen]
pub fn format_kb(bytes: f64) -> String {
    image_utils_core::format_kb(bytes.max(0.0) as u64)
}
