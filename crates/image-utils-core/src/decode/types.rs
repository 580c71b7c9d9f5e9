//! Decoded pixel buffers and decode errors.

use thiserror::Error;

/// Why a byte buffer could not be turned into pixels.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No bytes were supplied.
    #[error("Image data is empty")]
    Empty,

    /// The container format could not be recognized or is not compiled in.
    #[error("Invalid or unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The format was recognized but the data is truncated or malformed.
    #[error("Corrupted image data: {0}")]
    CorruptedFile(String),
}

/// Channel layout of a decoded image. All modes are 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Single gray channel.
    Luma,
    /// Gray plus alpha.
    LumaAlpha,
    /// Red, green, blue.
    Rgb,
    /// Red, green, blue plus alpha.
    Rgba,
}

impl ColorMode {
    /// Number of bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            ColorMode::Luma => 1,
            ColorMode::LumaAlpha => 2,
            ColorMode::Rgb => 3,
            ColorMode::Rgba => 4,
        }
    }

    pub fn has_alpha(self) -> bool {
        matches!(self, ColorMode::LumaAlpha | ColorMode::Rgba)
    }
}

/// A decoded image with 8-bit pixel data.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of `pixels`.
    pub mode: ColorMode,
    /// Pixel data in row-major order.
    /// Length should be width * height * mode.channels().
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a new DecodedImage with the given dimensions, mode and pixel data.
    pub fn new(width: u32, height: u32, mode: ColorMode, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * mode.channels(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            mode,
            pixels,
        }
    }

    /// Create a DecodedImage from an image::DynamicImage, narrowing any
    /// 16-bit or float buffer to 8 bits per channel.
    pub fn from_dynamic(img: image::DynamicImage) -> Self {
        use image::DynamicImage as D;

        let (width, height) = (img.width(), img.height());
        let (mode, pixels) = match img {
            D::ImageLuma8(buf) => (ColorMode::Luma, buf.into_raw()),
            D::ImageLumaA8(buf) => (ColorMode::LumaAlpha, buf.into_raw()),
            D::ImageRgb8(buf) => (ColorMode::Rgb, buf.into_raw()),
            D::ImageRgba8(buf) => (ColorMode::Rgba, buf.into_raw()),
            other => {
                let color = other.color();
                match (color.has_color(), color.has_alpha()) {
                    (false, false) => (ColorMode::Luma, other.into_luma8().into_raw()),
                    (false, true) => (ColorMode::LumaAlpha, other.into_luma_alpha8().into_raw()),
                    (true, false) => (ColorMode::Rgb, other.into_rgb8().into_raw()),
                    (true, true) => (ColorMode::Rgba, other.into_rgba8().into_raw()),
                }
            }
        };

        Self {
            width,
            height,
            mode,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_channels() {
        assert_eq!(ColorMode::Luma.channels(), 1);
        assert_eq!(ColorMode::LumaAlpha.channels(), 2);
        assert_eq!(ColorMode::Rgb.channels(), 3);
        assert_eq!(ColorMode::Rgba.channels(), 4);
    }

    #[test]
    fn test_color_mode_alpha() {
        assert!(!ColorMode::Luma.has_alpha());
        assert!(ColorMode::LumaAlpha.has_alpha());
        assert!(!ColorMode::Rgb.has_alpha());
        assert!(ColorMode::Rgba.has_alpha());
    }

    #[test]
    fn test_decoded_image_creation() {
        let img = DecodedImage::new(100, 50, ColorMode::Rgb, vec![0u8; 100 * 50 * 3]);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixels.len(), 15_000);
    }

    #[test]
    fn test_from_dynamic_keeps_8bit_layout() {
        let rgba = image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 4]));
        let img = DecodedImage::from_dynamic(image::DynamicImage::ImageRgba8(rgba));

        assert_eq!(img.mode, ColorMode::Rgba);
        assert_eq!(img.pixels.len(), 16);
        assert_eq!(&img.pixels[0..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_dynamic_narrows_16bit() {
        let rgb16 = image::ImageBuffer::<image::Rgb<u16>, Vec<u16>>::from_pixel(
            3,
            1,
            image::Rgb([u16::MAX, 0, u16::MAX]),
        );
        let img = DecodedImage::from_dynamic(image::DynamicImage::ImageRgb16(rgb16));

        assert_eq!(img.mode, ColorMode::Rgb);
        assert_eq!(img.pixels.len(), 9);
        assert_eq!(&img.pixels[0..3], &[255, 0, 255]);
    }

    #[test]
    fn test_from_dynamic_narrows_16bit_gray_alpha() {
        let la16 = image::ImageBuffer::<image::LumaA<u16>, Vec<u16>>::from_pixel(
            1,
            1,
            image::LumaA([u16::MAX, u16::MAX]),
        );
        let img = DecodedImage::from_dynamic(image::DynamicImage::ImageLumaA16(la16));

        assert_eq!(img.mode, ColorMode::LumaAlpha);
        assert_eq!(img.pixels, vec![255, 255]);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedFormat("format not recognized".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid or unsupported image format: format not recognized"
        );

        let err = DecodeError::Empty;
        assert_eq!(err.to_string(), "Image data is empty");
    }
}
