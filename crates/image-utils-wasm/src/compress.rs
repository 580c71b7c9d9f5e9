//! Batch compression WASM bindings.
//!
//! # Functions
//!
//! - [`compress_batch`] - Compress uploaded files given as `Uint8Array`s
//! - [`compress_batch_data_urls`] - Compress uploads given as base64 data URLs
//!
//! # Example
//!
//! ```typescript
//! import { compress_batch, archive_filename } from '@image-utils/wasm';
//!
//! const names = files.map((f) => f.name);
//! const bytes = await Promise.all(files.map(async (f) => new Uint8Array(await f.arrayBuffer())));
//!
//! try {
//!   const batch = compress_batch(names, bytes, 85);
//!   console.log(batch.summary());
//!   download(new Blob([batch.archive()]), archive_filename());
//! } catch (message) {
//!   // e.g. "Unsupported file format for notes.txt. Please upload only PNG, JPG, or JPEG images."
//!   showError(message);
//! }
//! ```

use crate::types::{
    bytes_from_array, inputs_from_data_urls, pair_inputs, to_js_error, JsBatchResult,
};
use image_utils_core::options::DEFAULT_QUALITY;
use image_utils_core::{batch, CompressOptions, ImageInput};
use wasm_bindgen::prelude::*;

/// Compress a batch of PNG/JPEG uploads into JPEGs plus one zip archive.
///
/// # Arguments
///
/// * `filenames` - Upload filenames, used for extension checks and output names
/// * `files` - Array of `Uint8Array`, one per filename, same order
/// * `quality` - JPEG quality (1-100, recommended: 85). Fractions are
///   rounded, values outside the range are clamped and `NaN` means 85
///
/// # Errors
///
/// Throws a message string if the batch is empty, a filename is not
/// `.png`/`.jpg`/`.jpeg`, or any file fails to decode. No partial result is
/// returned.
#[wasm_bindgen]
pub fn compress_batch(
    filenames: Vec<String>,
    files: js_sys::Array,
    quality: f64,
) -> Result<JsBatchResult, JsValue> {
    let inputs = pair_inputs(filenames, bytes_from_array(&files)).map_err(to_js_error)?;
    run_batch(&inputs, quality_from_js(quality)).map_err(to_js_error)
}

/// Compress a batch of uploads supplied as `data:` URLs.
///
/// This matches what `FileReader.readAsDataURL` produces.
#[wasm_bindgen]
pub fn compress_batch_data_urls(
    filenames: Vec<String>,
    urls: Vec<String>,
    quality: f64,
) -> Result<JsBatchResult, JsValue> {
    let inputs = inputs_from_data_urls(filenames, urls).map_err(to_js_error)?;
    run_batch(&inputs, quality_from_js(quality)).map_err(to_js_error)
}

/// JS numbers arrive as `f64`; a `u8` parameter would wrap 300 to 44.
fn quality_from_js(quality: f64) -> u8 {
    if quality.is_nan() {
        return DEFAULT_QUALITY;
    }
    quality.round().clamp(1.0, 100.0) as u8
}

fn run_batch(inputs: &[ImageInput], quality: u8) -> Result<JsBatchResult, batch::BatchError> {
    batch::compress_batch(inputs, &CompressOptions::with_quality(quality))
        .map(JsBatchResult::from_batch)
}
