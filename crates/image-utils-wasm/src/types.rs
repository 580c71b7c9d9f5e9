//! WASM-compatible wrapper types and input plumbing.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! image-utils results, and the conversions from JavaScript upload data to
//! core `ImageInput`s.

use std::fmt::Display;

use image_utils_core::{BatchResult, ImageInput};
use wasm_bindgen::prelude::*;

/// A finished compression batch.
///
/// Item accessors take the item index in upload order. Out-of-range indices
/// return empty values rather than throwing.
#[wasm_bindgen]
pub struct JsBatchResult {
    inner: BatchResult,
}

#[wasm_bindgen]
impl JsBatchResult {
    /// The zip archive containing every compressed image.
    ///
    /// Note: This creates a copy of the archive bytes.
    pub fn archive(&self) -> Vec<u8> {
        self.inner.archive_bytes.clone()
    }

    /// Number of compressed images.
    #[wasm_bindgen(getter)]
    pub fn len(&self) -> usize {
        self.inner.items.len()
    }

    /// Whether the batch holds no images (never true for a successful batch).
    #[wasm_bindgen(getter, js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.items.is_empty()
    }

    /// Download name of item `index`, e.g. `photo_compressed.jpg`.
    pub fn filename(&self, index: usize) -> String {
        self.inner
            .items
            .get(index)
            .map(|item| item.output_filename.clone())
            .unwrap_or_default()
    }

    /// JPEG bytes of item `index`.
    pub fn bytes(&self, index: usize) -> Vec<u8> {
        self.inner
            .items
            .get(index)
            .map(|item| item.encoded_bytes.clone())
            .unwrap_or_default()
    }

    /// JPEG of item `index` as a `data:image/jpeg;base64,` URL, ready for an
    /// `<img src>` or download link.
    pub fn data_url(&self, index: usize) -> String {
        self.inner
            .items
            .get(index)
            .map(|item| item.to_data_url())
            .unwrap_or_default()
    }

    pub fn original_size(&self, index: usize) -> f64 {
        self.inner
            .items
            .get(index)
            .map_or(0.0, |item| item.original_size_bytes as f64)
    }

    pub fn compressed_size(&self, index: usize) -> f64 {
        self.inner
            .items
            .get(index)
            .map_or(0.0, |item| item.compressed_size_bytes as f64)
    }

    #[wasm_bindgen(getter)]
    pub fn total_original_size(&self) -> f64 {
        self.inner.total_original_size_bytes as f64
    }

    #[wasm_bindgen(getter)]
    pub fn total_compressed_size(&self) -> f64 {
        self.inner.total_compressed_size_bytes as f64
    }

    /// Percentage saved across the batch, or `undefined` when not defined.
    #[wasm_bindgen(getter)]
    pub fn reduction_percent(&self) -> Option<f64> {
        self.inner.reduction_percent()
    }

    /// Three-line human-readable summary of the batch totals.
    pub fn summary(&self) -> String {
        self.inner.summary().to_string()
    }
}

impl JsBatchResult {
    pub(crate) fn from_batch(inner: BatchResult) -> Self {
        Self { inner }
    }
}

/// Pair upload filenames with their bytes, preserving order.
pub(crate) fn pair_inputs(
    filenames: Vec<String>,
    files: Vec<Vec<u8>>,
) -> Result<Vec<ImageInput>, String> {
    if filenames.len() != files.len() {
        return Err(format!(
            "Got {} filenames for {} files",
            filenames.len(),
            files.len()
        ));
    }
    Ok(filenames
        .into_iter()
        .zip(files)
        .map(|(name, bytes)| ImageInput::new(name, bytes))
        .collect())
}

/// Pair upload filenames with base64 data URLs, preserving order.
pub(crate) fn inputs_from_data_urls(
    filenames: Vec<String>,
    urls: Vec<String>,
) -> Result<Vec<ImageInput>, String> {
    if filenames.len() != urls.len() {
        return Err(format!(
            "Got {} filenames for {} data URLs",
            filenames.len(),
            urls.len()
        ));
    }
    filenames
        .into_iter()
        .zip(urls)
        .map(|(name, url)| {
            ImageInput::from_data_url(name.clone(), &url).map_err(|e| format!("{name}: {e}"))
        })
        .collect()
}

/// Copy every `Uint8Array` of a JavaScript array into Rust memory.
pub(crate) fn bytes_from_array(files: &js_sys::Array) -> Vec<Vec<u8>> {
    files
        .iter()
        .map(|value| js_sys::Uint8Array::new(&value).to_vec())
        .collect()
}

/// Report an error to the browser console and convert it for JavaScript.
pub(crate) fn to_js_error(err: impl Display) -> JsValue {
    let message = err.to_string();
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
