//! Codec adapters for format-specific backends.
//!
//! Each module is a thin adapter between the facade's uniform contract and
//! one backend decoder crate: a `decode` that produces the canonical RGBA8
//! buffer and a `probe` that parses only headers. Exactly one adapter exists
//! per format; which formats are present is fixed at compile time by the
//! codec features.

#[cfg(feature = "jpeg")]
pub(crate) mod jpeg;

#[cfg(feature = "png")]
pub(crate) mod png;

#[cfg(feature = "webp")]
pub(crate) mod webp;
