//! PNG codec adapter using the png crate.

use std::io::Cursor;

use crate::convert;
use crate::error::DecodeError;
use crate::format::ImageFormat;
use crate::image::{DecodedImage, ImageMetadata};
use crate::memory;

/// Probe PNG dimensions without decoding pixel data.
///
/// `read_info` parses chunks up to the start of the image data and never
/// inflates a pixel row.
pub(crate) fn probe(data: &[u8]) -> Result<ImageMetadata, DecodeError> {
    let decoder = png::Decoder::new(Cursor::new(data));
    let reader = decoder
        .read_info()
        .map_err(|e| DecodeError::malformed(ImageFormat::Png, e))?;

    let info = reader.info();
    ImageMetadata::new(ImageFormat::Png, info.width, info.height)
}

/// Decode PNG to canonical RGBA8.
///
/// Palette and sub-8-bit images are expanded and 16-bit channels stripped by
/// the decoder, which leaves four possible output layouts; everything except
/// RGBA goes through a conversion pass. tRNS transparency becomes a real
/// alpha channel under the same expansion.
pub(crate) fn decode(data: &[u8]) -> Result<DecodedImage, DecodeError> {
    let mut decoder = png::Decoder::new(Cursor::new(data));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| DecodeError::malformed(ImageFormat::Png, e))?;

    let buffer_size = reader.output_buffer_size().ok_or(DecodeError::Oom)?;
    let mut raw = memory::alloc_pixel_buffer(buffer_size)?;
    // next_frame writes into an initialized slice
    raw.resize(buffer_size, 0);

    let out = reader
        .next_frame(&mut raw)
        .map_err(|e| DecodeError::malformed(ImageFormat::Png, e))?;
    raw.truncate(out.buffer_size());

    let rgba = match out.color_type {
        png::ColorType::Rgba => raw,
        png::ColorType::Rgb => convert::rgb8_to_rgba8(&raw),
        png::ColorType::GrayscaleAlpha => convert::gray_alpha8_to_rgba8(&raw),
        png::ColorType::Grayscale => convert::gray8_to_rgba8(&raw),
        // EXPAND is set above, so indexed output cannot appear
        png::ColorType::Indexed => {
            return Err(DecodeError::InvalidOutput {
                format: ImageFormat::Png,
                detail: "indexed output after palette expansion",
            });
        }
    };

    DecodedImage::from_rgba8(ImageFormat::Png, rgba, out.width, out.height)
}
