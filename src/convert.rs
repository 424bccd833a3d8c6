//! Conversion into the canonical RGBA8 layout.
//!
//! Backends that already emit RGBA bypass this module; the rest go through
//! one of these expansions as the final step of their adapter. Alpha is
//! preserved untouched where the source carries it and set to 255 where it
//! does not. Nothing here composites onto a background color.

use rgb::{Rgb, Rgba};

const OPAQUE: u8 = 255;

/// RGB8 → RGBA8 with alpha = 255.
///
/// `src.len()` must be a multiple of 3 (guaranteed by the backends that
/// produce RGB output).
pub(crate) fn rgb8_to_rgba8(src: &[u8]) -> Vec<u8> {
    let pixels: &[Rgb<u8>] = bytemuck::cast_slice(src);
    let rgba: Vec<Rgba<u8>> = pixels
        .iter()
        .map(|p| Rgba {
            r: p.r,
            g: p.g,
            b: p.b,
            a: OPAQUE,
        })
        .collect();
    bytemuck::cast_vec(rgba)
}

/// Gray8 → RGBA8: luma replicated across RGB, alpha = 255.
pub(crate) fn gray8_to_rgba8(src: &[u8]) -> Vec<u8> {
    let rgba: Vec<Rgba<u8>> = src
        .iter()
        .map(|&g| Rgba {
            r: g,
            g,
            b: g,
            a: OPAQUE,
        })
        .collect();
    bytemuck::cast_vec(rgba)
}

/// GrayAlpha8 → RGBA8: luma replicated, source alpha kept.
///
/// `src.len()` must be a multiple of 2.
pub(crate) fn gray_alpha8_to_rgba8(src: &[u8]) -> Vec<u8> {
    let rgba: Vec<Rgba<u8>> = src
        .chunks_exact(2)
        .map(|ga| Rgba {
            r: ga[0],
            g: ga[0],
            b: ga[0],
            a: ga[1],
        })
        .collect();
    bytemuck::cast_vec(rgba)
}
