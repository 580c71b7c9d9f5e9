//! Shared fixtures for unit tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::ImageInput;

/// Opaque RGB gradient with enough detail for quality to matter.
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x * 7 + y * 13) % 256) as u8,
        ])
    });
    DynamicImage::ImageRgb8(img)
}

/// RGBA image with a mix of opaque and transparent pixels.
pub fn rgba_image(width: u32, height: u32) -> DynamicImage {
    let img = image::RgbaImage::from_fn(width, height, |x, y| {
        let alpha = if (x + y) % 2 == 0 { 255 } else { 0 };
        image::Rgba([(x * 30) as u8, (y * 30) as u8, 200, alpha])
    });
    DynamicImage::ImageRgba8(img)
}

pub fn gray_image(width: u32, height: u32) -> DynamicImage {
    let img = image::GrayImage::from_fn(width, height, |x, y| image::Luma([((x + y) * 9) as u8]));
    DynamicImage::ImageLuma8(img)
}

/// Encode an image into the given container format.
pub fn encode_as(img: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    bytes
}

pub fn png_input(name: &str, width: u32, height: u32) -> ImageInput {
    ImageInput::new(name, encode_as(&gradient_image(width, height), ImageFormat::Png))
}

pub fn jpeg_input(name: &str, width: u32, height: u32) -> ImageInput {
    ImageInput::new(name, encode_as(&gradient_image(width, height), ImageFormat::Jpeg))
}
