//! WebP codec adapter using image-webp.

use std::io::Cursor;

use image_webp::WebPDecoder;

use crate::convert;
use crate::error::DecodeError;
use crate::format::ImageFormat;
use crate::image::{DecodedImage, ImageMetadata};
use crate::memory;

/// Probe WebP dimensions without decoding pixel data.
///
/// Constructing the decoder parses the RIFF chunk layout and the
/// VP8/VP8L/VP8X headers only.
pub(crate) fn probe(data: &[u8]) -> Result<ImageMetadata, DecodeError> {
    let decoder = WebPDecoder::new(Cursor::new(data))
        .map_err(|e| DecodeError::malformed(ImageFormat::WebP, e))?;

    let (width, height) = decoder.dimensions();
    ImageMetadata::new(ImageFormat::WebP, width, height)
}

/// Decode WebP to canonical RGBA8.
///
/// The backend emits RGB for images without an alpha channel and RGBA
/// otherwise; the former gets an opaque alpha channel appended.
pub(crate) fn decode(data: &[u8]) -> Result<DecodedImage, DecodeError> {
    let mut decoder = WebPDecoder::new(Cursor::new(data))
        .map_err(|e| DecodeError::malformed(ImageFormat::WebP, e))?;

    let (width, height) = decoder.dimensions();
    let buffer_size = decoder.output_buffer_size().ok_or(DecodeError::Oom)?;

    let mut raw = memory::alloc_pixel_buffer(buffer_size)?;
    // read_image writes into an initialized slice
    raw.resize(buffer_size, 0);
    decoder
        .read_image(&mut raw)
        .map_err(|e| DecodeError::malformed(ImageFormat::WebP, e))?;

    let rgba = if decoder.has_alpha() {
        raw
    } else {
        convert::rgb8_to_rgba8(&raw)
    };

    DecodedImage::from_rgba8(ImageFormat::WebP, rgba, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_webp(pixels: &[u8], width: u32, height: u32, color: image_webp::ColorType) -> Vec<u8> {
        let mut out = Vec::new();
        image_webp::WebPEncoder::new(&mut out)
            .encode(pixels, width, height, color)
            .unwrap();
        out
    }

    #[test]
    fn lossless_rgba_roundtrips_exactly() {
        #[rustfmt::skip]
        let pixels = [
            255, 0, 0, 255,    0, 255, 0, 128,
            0, 0, 255, 64,     255, 255, 255, 0,
        ];
        let encoded = encode_webp(&pixels, 2, 2, image_webp::ColorType::Rgba8);

        let image = decode(&encoded).unwrap();
        assert_eq!((image.width(), image.height()), (2, 2));
        // Lossless WebP preserves the alpha channel untouched.
        assert_eq!(image.pixels(), pixels);
    }

    #[test]
    fn rgb_gains_opaque_alpha() {
        let pixels = [10, 20, 30, 40, 50, 60];
        let encoded = encode_webp(&pixels, 2, 1, image_webp::ColorType::Rgb8);

        let image = decode(&encoded).unwrap();
        assert_eq!(
            image.pixels(),
            [10, 20, 30, 255, 40, 50, 60, 255]
        );
    }

    #[test]
    fn probe_matches_decode_dimensions() {
        let encoded = encode_webp(&[0u8; 7 * 5 * 4], 7, 5, image_webp::ColorType::Rgba8);

        let meta = probe(&encoded).unwrap();
        assert_eq!((meta.width, meta.height), (7, 5));

        let image = decode(&encoded).unwrap();
        assert_eq!((image.width(), image.height()), (7, 5));
    }

    #[test]
    fn truncated_data_fails() {
        let encoded = encode_webp(&[0u8; 4 * 4 * 4], 4, 4, image_webp::ColorType::Rgba8);

        // RIFF header alone: chunk layout is unreadable.
        assert!(matches!(
            probe(&encoded[..14]),
            Err(DecodeError::Malformed { .. })
        ));
        assert!(matches!(
            decode(&encoded[..14]),
            Err(DecodeError::Malformed { .. })
        ));
    }
}
