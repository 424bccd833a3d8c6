//! Decoded image and metadata value types.

use crate::error::DecodeError;
use crate::memory;

/// A fully decoded image in canonical layout: tightly-packed RGBA8, row-major,
/// top row first, 4 bytes per pixel, no padding between rows.
///
/// Alpha is non-premultiplied; opaque sources decode with alpha = 255 for
/// every pixel. The buffer invariant holds for every instance: either the
/// buffer is empty and both dimensions are 0 (the empty state returned on
/// failure), or the buffer is exactly `width * height * 4` bytes with both
/// dimensions non-zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl DecodedImage {
    /// The empty state: no buffer, zero dimensions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from a canonical RGBA8 buffer, validating the size invariant.
    ///
    /// Adapters call this as the last step of a successful decode; a buffer
    /// that does not match the reported dimensions is rejected here rather
    /// than handed to the caller partially filled.
    pub(crate) fn from_rgba8(
        format: crate::ImageFormat,
        pixels: Vec<u8>,
        width: u32,
        height: u32,
    ) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidOutput {
                format,
                detail: "zero-sized image",
            });
        }

        let expected = memory::rgba_buffer_len(width, height).ok_or(DecodeError::Oom)?;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidOutput {
                format,
                detail: "pixel buffer does not match dimensions",
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Image width in pixels; 0 for the empty state.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels; 0 for the empty state.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel buffer; empty for the empty state.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether this is the empty (failed/released) state.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Consume the image, returning the owned RGBA8 buffer.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.pixels
    }

    /// Free the pixel buffer and reset to the empty state.
    ///
    /// Safe to call on an empty image and safe to call repeatedly; after the
    /// first call the image compares equal to [`DecodedImage::empty`].
    /// Dropping the image frees the buffer as well; this exists for callers
    /// that want to reclaim the memory while keeping the value around.
    pub fn release(&mut self) {
        self.pixels = Vec::new();
        self.width = 0;
        self.height = 0;
    }
}

/// Image dimensions obtained from a header-only parse.
///
/// Plain value type: `width` and `height` are both 0 when metadata could not
/// be decoded, and both non-zero otherwise.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
}

impl ImageMetadata {
    /// The zeroed state returned for undecodable input.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(
        format: crate::ImageFormat,
        width: u32,
        height: u32,
    ) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidOutput {
                format,
                detail: "zero-sized image",
            });
        }
        Ok(Self { width, height })
    }

    /// Whether this is the zeroed state.
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }
}
