//! Image-to-PDF WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { compose_document, document_filename } from '@image-utils/wasm';
//!
//! const pdf = compose_document(names, bytes, { title: 'Receipts' });
//! download(new Blob([pdf], { type: 'application/pdf' }), document_filename());
//! ```

use crate::types::{bytes_from_array, pair_inputs, to_js_error};
use image_utils_core::{document, DocumentOptions};
use wasm_bindgen::prelude::*;

/// Compose the uploaded images into one PDF, one page per image.
///
/// # Arguments
///
/// * `filenames` - Upload filenames, used only in error messages
/// * `files` - Array of `Uint8Array`, one per filename, same order
/// * `options` - Optional `{ resolution, image_quality, title, author }`;
///   missing fields take their defaults (100 dpi, quality 75)
///
/// # Returns
///
/// The PDF bytes as a `Uint8Array`.
#[wasm_bindgen]
pub fn compose_document(
    filenames: Vec<String>,
    files: js_sys::Array,
    options: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let options = parse_options(options)?;
    let inputs = pair_inputs(filenames, bytes_from_array(&files)).map_err(to_js_error)?;

    document::compose_document(&inputs, &options)
        .map(|doc| doc.document_bytes)
        .map_err(to_js_error)
}

fn parse_options(options: JsValue) -> Result<DocumentOptions, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(DocumentOptions::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| to_js_error(format!("Invalid options: {e}")))
}

/// WASM-specific tests that require JsValue.
///
/// Native coverage of composition lives in `image_utils_core::document`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn png_array(count: usize) -> js_sys::Array {
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(4, 4, image::Rgb([1, 2, 3])))
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        let array = js_sys::Array::new();
        for _ in 0..count {
            array.push(&js_sys::Uint8Array::from(bytes.as_slice()));
        }
        array
    }

    #[wasm_bindgen_test]
    fn test_compose_document_default_options() {
        let names = vec!["a.png".to_string(), "b.png".to_string()];
        let pdf = compose_document(names, png_array(2), JsValue::UNDEFINED).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
    }

    #[wasm_bindgen_test]
    fn test_compose_document_empty() {
        let result = compose_document(vec![], png_array(0), JsValue::UNDEFINED);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_parse_partial_options() {
        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"resolution".into(), &JsValue::from_f64(300.0)).unwrap();

        let options = parse_options(obj.into()).unwrap();
        assert_eq!(options.resolution, 300.0);
        assert_eq!(options.image_quality, 75);
    }
}
