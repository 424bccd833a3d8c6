//! JPEG codec adapter using zune-jpeg.

use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use crate::error::DecodeError;
use crate::format::ImageFormat;
use crate::image::{DecodedImage, ImageMetadata};

/// Probe JPEG dimensions without decoding pixel data.
///
/// Parses marker segments up to the frame header; the entropy-coded scan is
/// never touched.
pub(crate) fn probe(data: &[u8]) -> Result<ImageMetadata, DecodeError> {
    let mut decoder = JpegDecoder::new(data);
    decoder
        .decode_headers()
        .map_err(|e| DecodeError::malformed(ImageFormat::Jpeg, e))?;

    let (width, height) = dimensions(&decoder)?;
    ImageMetadata::new(ImageFormat::Jpeg, width, height)
}

/// Decode JPEG to canonical RGBA8.
///
/// zune-jpeg converts to RGBA during decode (alpha forced to 255, grayscale
/// replicated across RGB), so no conversion pass is needed here.
pub(crate) fn decode(data: &[u8]) -> Result<DecodedImage, DecodeError> {
    let options = DecoderOptions::default().jpeg_set_out_colorspace(ColorSpace::RGBA);
    let mut decoder = JpegDecoder::new_with_options(data, options);

    let pixels = decoder
        .decode()
        .map_err(|e| DecodeError::malformed(ImageFormat::Jpeg, e))?;

    let (width, height) = dimensions(&decoder)?;
    DecodedImage::from_rgba8(ImageFormat::Jpeg, pixels, width, height)
}

/// Dimensions reported by a decoder whose headers have been parsed.
fn dimensions(decoder: &JpegDecoder<&[u8]>) -> Result<(u32, u32), DecodeError> {
    // JPEG dimensions are 16-bit, so the u32 casts are lossless.
    let (width, height) = decoder.dimensions().ok_or(DecodeError::InvalidOutput {
        format: ImageFormat::Jpeg,
        detail: "no dimensions after header parse",
    })?;
    Ok((width as u32, height as u32))
}
