//! Image format detection.

/// Decodable image formats.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
}

/// PNG signature: 89 50 4E 47 0D 0A 1A 0A.
const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// JPEG SOI + marker prefix: FF D8 FF.
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

impl ImageFormat {
    /// Detect format from magic bytes. Returns None if unrecognized.
    ///
    /// Classification reads only the leading bytes; trailing content is
    /// ignored. A buffer that holds nothing but the signature itself is
    /// treated as unrecognized; detection requires at least one byte past
    /// the signature span.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.len() > JPEG_SIGNATURE.len() && data[..3] == JPEG_SIGNATURE {
            return Some(ImageFormat::Jpeg);
        }

        if data.len() > PNG_SIGNATURE.len() && data[..8] == PNG_SIGNATURE {
            return Some(ImageFormat::Png);
        }

        // WebP: RIFF container, "WEBP" fourcc at offset 8
        if data.len() > 12 && &data[..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }

        None
    }

    /// Detect format from file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" | "jpe" | "jfif" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// MIME type string.
    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Common file extensions.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ImageFormat::Jpeg => &["jpg", "jpeg", "jpe", "jfif"],
            ImageFormat::Png => &["png"],
            ImageFormat::WebP => &["webp"],
        }
    }
}
