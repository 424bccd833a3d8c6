//! # rasterdec
//!
//! Uniform decoding of JPEG, PNG, and WebP into one canonical pixel layout:
//! tightly-packed, top-to-bottom, 8-bit-per-channel RGBA.
//!
//! The format is sniffed from magic bytes and dispatched to a per-format
//! adapter wrapping a backend codec crate. Each codec is feature-gated;
//! enable only what you need:
//!
//! ```toml
//! [dependencies]
//! rasterdec = { version = "0.1", features = ["jpeg", "png", "webp"] }
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rasterdec::{decode_image, decode_image_metadata};
//!
//! let data: &[u8] = &[]; // your image bytes
//!
//! // Dimensions only: header parse, no pixel decode.
//! let meta = decode_image_metadata(data);
//! assert_eq!((meta.width, meta.height), (0, 0));
//!
//! // Full decode. Failures of any kind (unrecognized format, malformed
//! // data, codec compiled out) collapse to the empty image.
//! let image = decode_image(data);
//! assert_eq!(image.pixels().len(), (image.width() * image.height() * 4) as usize);
//! ```
//!
//! The `try_` variants ([`try_decode_image`], [`try_decode_image_metadata`])
//! report the failure reason as a [`DecodeError`] instead of collapsing it.

#![forbid(unsafe_code)]

mod codecs;
#[cfg(any(feature = "png", feature = "webp"))]
mod convert;
mod decode;
mod error;
mod format;
mod image;
mod memory;

pub use decode::{decode_image, decode_image_metadata, try_decode_image, try_decode_image_metadata};
pub use error::DecodeError;
pub use format::ImageFormat;
pub use image::{DecodedImage, ImageMetadata};
