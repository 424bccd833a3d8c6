//! Unified error type for decode operations.

use thiserror::Error;

use crate::format::ImageFormat;

/// Unified error type for decode operations.
///
/// Backend codec errors are carried as a boxed `source` so no backend error
/// type appears in any public signature. The infallible facade functions in
/// [`crate::decode`] collapse every variant into the zeroed result; this type
/// is only observable through the `try_` variants.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// Format not recognized from magic bytes.
    #[error("unrecognized image format")]
    UnrecognizedFormat,

    /// Format recognized but its codec is not compiled into this build.
    #[error("format {0:?} not supported (codec not compiled in)")]
    UnsupportedFormat(ImageFormat),

    /// Pixel buffer could not be allocated.
    #[error("pixel buffer allocation failed")]
    Oom,

    /// Recognized signature but the backend failed to parse or decode.
    #[error("malformed {format:?} data: {source}")]
    Malformed {
        format: ImageFormat,
        #[source]
        source: Box<dyn core::error::Error + Send + Sync>,
    },

    /// Backend reported success but violated the output contract.
    #[error("{format:?} decoder produced invalid output: {detail}")]
    InvalidOutput {
        format: ImageFormat,
        detail: &'static str,
    },
}

impl DecodeError {
    /// Wrap a backend-specific error.
    pub(crate) fn malformed<E>(format: ImageFormat, error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        DecodeError::Malformed {
            format,
            source: Box::new(error),
        }
    }
}
