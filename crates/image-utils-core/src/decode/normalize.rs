//! Color mode normalization ahead of JPEG encoding.

use super::{ColorMode, DecodedImage};

/// Drop the alpha channel of an image, leaving other modes untouched.
///
/// RGBA becomes RGB and gray+alpha becomes RGB with the gray value
/// replicated. Alpha is discarded, not composited: transparent pixels keep
/// whatever color values were stored underneath.
pub fn normalize(image: DecodedImage) -> DecodedImage {
    if !image.mode.has_alpha() {
        return image;
    }

    let DecodedImage {
        width,
        height,
        mode,
        pixels,
    } = image;

    // Alpha is always the last channel
    let pixels = if mode == ColorMode::LumaAlpha {
        pixels
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect()
    } else {
        pixels
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    };

    DecodedImage {
        width,
        height,
        mode: ColorMode::Rgb,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_drops_alpha_without_compositing() {
        // Fully transparent red must stay red, not become the background color
        let img = DecodedImage::new(2, 1, ColorMode::Rgba, vec![255, 0, 0, 0, 0, 0, 255, 128]);
        let out = normalize(img);

        assert_eq!(out.mode, ColorMode::Rgb);
        assert_eq!(out.pixels, vec![255, 0, 0, 0, 0, 255]);
    }

    #[test]
    fn test_luma_alpha_becomes_rgb() {
        let img = DecodedImage::new(2, 1, ColorMode::LumaAlpha, vec![10, 0, 200, 255]);
        let out = normalize(img);

        assert_eq!(out.mode, ColorMode::Rgb);
        assert_eq!(out.pixels, vec![10, 10, 10, 200, 200, 200]);
    }

    #[test]
    fn test_rgb_passes_through() {
        let pixels = vec![1, 2, 3, 4, 5, 6];
        let out = normalize(DecodedImage::new(2, 1, ColorMode::Rgb, pixels.clone()));

        assert_eq!(out.mode, ColorMode::Rgb);
        assert_eq!(out.pixels, pixels);
    }

    #[test]
    fn test_luma_passes_through() {
        let out = normalize(DecodedImage::new(3, 1, ColorMode::Luma, vec![0, 127, 255]));

        assert_eq!(out.mode, ColorMode::Luma);
        assert_eq!(out.pixels, vec![0, 127, 255]);
    }

    #[test]
    fn test_only_alpha_modes_change() {
        for mode in [ColorMode::Luma, ColorMode::LumaAlpha, ColorMode::Rgb, ColorMode::Rgba] {
            let img = DecodedImage::new(2, 2, mode, vec![50u8; 4 * mode.channels()]);
            let out = normalize(img);

            let expected = if mode.has_alpha() { ColorMode::Rgb } else { mode };
            assert_eq!(out.mode, expected);
            assert_eq!(out.pixels.len(), 4 * expected.channels());
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        let out = normalize(DecodedImage::new(
            7,
            5,
            ColorMode::Rgba,
            vec![9u8; 7 * 5 * 4],
        ));

        assert_eq!((out.width, out.height), (7, 5));
        assert_eq!(out.pixels.len(), 7 * 5 * 3);
    }
}
