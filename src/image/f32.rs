//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Holds gradient components and magnitudes. Values produced from 8-bit
//! input by 3×3 integer kernels are exactly representable.
use crate::error::{try_filled_vec, FilterError, Result};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Reserve a zero-initialized buffer of size `w × h`.
    pub fn try_new(w: usize, h: usize) -> Result<Self> {
        let len = w
            .checked_mul(h)
            .ok_or_else(|| FilterError::invalid(format!("{w}x{h} overflows usize")))?;
        Ok(Self {
            w,
            h,
            stride: w,
            data: try_filled_vec(len, 0.0)?,
        })
    }
    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
