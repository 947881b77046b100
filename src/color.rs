//! Packed-pixel unpacking and grayscale conversion.
//!
//! The luma weights are the BT.601 coefficients `0.299 R + 0.587 G + 0.114 B`
//! evaluated in 14-bit fixed point with round-half-up, which is bit-exact with
//! the 8-bit colour conversion of the common vision libraries.
use crate::error::{try_filled_vec, Result};
use crate::image::{Frame, GrayImageU8, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

/// How the four channels are packed into one `u32`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelLayout {
    /// `0xAARRGGBB`, channels extracted with shifts (JVM / Android `int` pixels).
    #[default]
    Argb,
    /// Native-endian memory bytes read as R, G, B, A.
    RgbaBytes,
}

impl PixelLayout {
    /// Split a packed pixel into `[r, g, b, a]`.
    #[inline]
    pub fn unpack(self, px: u32) -> [u8; 4] {
        match self {
            PixelLayout::Argb => [
                (px >> 16) as u8,
                (px >> 8) as u8,
                px as u8,
                (px >> 24) as u8,
            ],
            PixelLayout::RgbaBytes => px.to_ne_bytes(),
        }
    }
}

/// Pack channels as `0xAARRGGBB`, the inverse of `PixelLayout::Argb`.
#[inline]
pub fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + LUMA_ROUND) >> LUMA_SHIFT) as u8
}

/// Owned 3-channel image in (blue, green, red) order, row-major, no padding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BgrImageU8 {
    pub w: usize,
    pub h: usize,
    /// `3 * w * h` interleaved bytes
    pub data: Vec<u8>,
}

impl BgrImageU8 {
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        let i = 3 * (y * self.w + x);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }
}

/// Drop alpha and reorder to BGR.
pub fn frame_to_bgr(frame: &Frame<'_>, layout: PixelLayout) -> Result<BgrImageU8> {
    let mut data = try_filled_vec(3 * frame.pixel_count(), 0u8)?;
    for (dst, &px) in data.chunks_exact_mut(3).zip(frame.pixels()) {
        let [r, g, b, _] = layout.unpack(px);
        dst.copy_from_slice(&[b, g, r]);
    }
    Ok(BgrImageU8 {
        w: frame.width(),
        h: frame.height(),
        data,
    })
}

/// Luma-weighted grayscale from a BGR image.
pub fn bgr_to_gray(bgr: &BgrImageU8) -> Result<GrayImageU8> {
    let mut gray = GrayImageU8::try_zeroed(bgr.w, bgr.h)?;
    let row_bytes = 3 * bgr.w;
    for (y, out) in gray.rows_mut().enumerate() {
        let src = &bgr.data[y * row_bytes..(y + 1) * row_bytes];
        for (dst, px) in out.iter_mut().zip(src.chunks_exact(3)) {
            *dst = luma(px[2], px[1], px[0]);
        }
    }
    Ok(gray)
}

/// Packed frame straight to grayscale; byte-identical to
/// `bgr_to_gray(&frame_to_bgr(..))` without the intermediate buffer.
pub fn frame_to_gray(frame: &Frame<'_>, layout: PixelLayout) -> Result<GrayImageU8> {
    let mut gray = GrayImageU8::try_zeroed(frame.width(), frame.height())?;
    for (out, src) in gray.rows_mut().zip(frame.rows()) {
        for (dst, &px) in out.iter_mut().zip(src) {
            let [r, g, b, _] = layout.unpack(px);
            *dst = luma(r, g, b);
        }
    }
    Ok(gray)
}
