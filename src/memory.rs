//! Pixel buffer allocation.
//!
//! All adapter output buffers come from here so allocation failure surfaces
//! as [`DecodeError::Oom`] instead of aborting the process. Buffers are
//! returned with capacity reserved but length 0; zero-filling, where a
//! backend needs an initialized slice to write into, is done at the call
//! site with an explicit `resize`.

use crate::error::DecodeError;

/// Byte length of a canonical RGBA8 buffer, or None if `width * height * 4`
/// overflows usize.
pub(crate) fn rgba_buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

/// Reserve a pixel buffer of exactly `byte_count` bytes.
///
/// A zero byte count yields an empty buffer. Reservation failure maps to
/// [`DecodeError::Oom`].
pub(crate) fn alloc_pixel_buffer(byte_count: usize) -> Result<Vec<u8>, DecodeError> {
    let mut buf = Vec::new();
    if byte_count > 0 {
        buf.try_reserve_exact(byte_count).map_err(|_| DecodeError::Oom)?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_len_checked() {
        assert_eq!(rgba_buffer_len(2, 2), Some(16));
        assert_eq!(rgba_buffer_len(0, 100), Some(0));
        assert_eq!(rgba_buffer_len(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn zero_byte_allocation_is_empty() {
        let buf = alloc_pixel_buffer(0).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.capacity(), 0);
    }

    #[test]
    fn allocation_reserves_without_filling() {
        let buf = alloc_pixel_buffer(64).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 64);
    }
}
