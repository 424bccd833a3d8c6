//! Decoding facade: sniff, dispatch, and collapse failures.

use log::debug;

use crate::error::DecodeError;
use crate::format::ImageFormat;
use crate::image::{DecodedImage, ImageMetadata};

/// Decode an image buffer to canonical RGBA8.
///
/// Never fails: empty input, unrecognized signatures, malformed data,
/// allocation failure, and formats compiled out of this build all return
/// [`DecodedImage::empty`]. Callers that need to know why get the
/// [`try_decode_image`] variant; the failure reason is otherwise only
/// logged at debug level.
pub fn decode_image(data: &[u8]) -> DecodedImage {
    match try_decode_image(data) {
        Ok(image) => image,
        Err(err) => {
            debug!("image decode failed: {err}");
            DecodedImage::empty()
        }
    }
}

/// Decode only image dimensions, without decoding pixel data.
///
/// Same failure collapse as [`decode_image`]: any failure yields zeroed
/// [`ImageMetadata`].
pub fn decode_image_metadata(data: &[u8]) -> ImageMetadata {
    match try_decode_image_metadata(data) {
        Ok(meta) => meta,
        Err(err) => {
            debug!("metadata decode failed: {err}");
            ImageMetadata::empty()
        }
    }
}

/// Decode an image buffer, reporting failures as [`DecodeError`].
pub fn try_decode_image(data: &[u8]) -> Result<DecodedImage, DecodeError> {
    let format = ImageFormat::detect(data).ok_or(DecodeError::UnrecognizedFormat)?;
    decode_format(data, format)
}

/// Decode image dimensions, reporting failures as [`DecodeError`].
pub fn try_decode_image_metadata(data: &[u8]) -> Result<ImageMetadata, DecodeError> {
    let format = ImageFormat::detect(data).ok_or(DecodeError::UnrecognizedFormat)?;
    probe_format(data, format)
}

/// Dispatch to the format's compiled-in adapter.
///
/// A recognized format whose codec feature is off is a defined runtime
/// error, not a compile error.
fn decode_format(data: &[u8], format: ImageFormat) -> Result<DecodedImage, DecodeError> {
    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::codecs::jpeg::decode(data),
        #[cfg(not(feature = "jpeg"))]
        ImageFormat::Jpeg => Err(DecodeError::UnsupportedFormat(format)),

        #[cfg(feature = "png")]
        ImageFormat::Png => crate::codecs::png::decode(data),
        #[cfg(not(feature = "png"))]
        ImageFormat::Png => Err(DecodeError::UnsupportedFormat(format)),

        #[cfg(feature = "webp")]
        ImageFormat::WebP => crate::codecs::webp::decode(data),
        #[cfg(not(feature = "webp"))]
        ImageFormat::WebP => Err(DecodeError::UnsupportedFormat(format)),
    }
}

/// Dispatch to the format's header-only probe.
fn probe_format(data: &[u8], format: ImageFormat) -> Result<ImageMetadata, DecodeError> {
    match format {
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => crate::codecs::jpeg::probe(data),
        #[cfg(not(feature = "jpeg"))]
        ImageFormat::Jpeg => Err(DecodeError::UnsupportedFormat(format)),

        #[cfg(feature = "png")]
        ImageFormat::Png => crate::codecs::png::probe(data),
        #[cfg(not(feature = "png"))]
        ImageFormat::Png => Err(DecodeError::UnsupportedFormat(format)),

        #[cfg(feature = "webp")]
        ImageFormat::WebP => crate::codecs::webp::probe(data),
        #[cfg(not(feature = "webp"))]
        ImageFormat::WebP => Err(DecodeError::UnsupportedFormat(format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_results() {
        assert!(decode_image(&[]).is_empty());
        assert!(decode_image_metadata(&[]).is_empty());
        assert!(matches!(
            try_decode_image(&[]),
            Err(DecodeError::UnrecognizedFormat)
        ));
        assert!(matches!(
            try_decode_image_metadata(&[]),
            Err(DecodeError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn unrecognized_bytes_yield_empty_results() {
        let data = [0x13, 0x37, 0xC0, 0xFF, 0xEE];
        let image = decode_image(&data);
        assert!(image.is_empty());
        assert_eq!((image.width(), image.height()), (0, 0));
        assert!(decode_image_metadata(&data).is_empty());
    }

    #[cfg(feature = "jpeg")]
    #[test]
    fn truncated_jpeg_collapses_but_still_classifies() {
        // Valid 3-byte signature, no usable frame data behind it.
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0xDE, 0xAD, 0xBE, 0xEF];
        assert_eq!(ImageFormat::detect(&data), Some(ImageFormat::Jpeg));
        assert!(matches!(
            try_decode_image(&data),
            Err(DecodeError::Malformed { .. })
        ));
        assert!(decode_image(&data).is_empty());
        assert!(decode_image_metadata(&data).is_empty());
    }

    #[cfg(not(feature = "webp"))]
    #[test]
    fn compiled_out_format_is_a_defined_failure() {
        let data = b"RIFF\x24\x00\x00\x00WEBPVP8 ";
        assert_eq!(ImageFormat::detect(data), Some(ImageFormat::WebP));
        assert!(matches!(
            try_decode_image(data),
            Err(DecodeError::UnsupportedFormat(ImageFormat::WebP))
        ));
        assert!(decode_image(data).is_empty());
        assert!(decode_image_metadata(data).is_empty());
    }
}
