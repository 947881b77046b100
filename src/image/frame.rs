//! Borrowed view over a caller-owned frame of packed 32-bit pixels.
//!
//! The view is the only way the filter touches caller memory: it is created
//! after the dimensions are validated and dropped when the call returns, on
//! success and error paths alike.
use crate::error::{FilterError, Result};
use crate::image::traits::ImageView;

/// Row-major `width × height` grid of packed colour samples, one `u32` each.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    w: usize,
    h: usize,
    data: &'a [u32],
}

impl<'a> Frame<'a> {
    /// Validate dimensions against the buffer and borrow it.
    ///
    /// Fails with `InvalidArgument` on a zero dimension, on `width * height`
    /// overflowing, or when `pixels.len()` differs from `width * height`.
    pub fn new(pixels: &'a [u32], width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::invalid(format!(
                "frame dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            FilterError::invalid(format!("frame dimensions {width}x{height} overflow"))
        })?;
        if pixels.len() != expected {
            return Err(FilterError::invalid(format!(
                "{width}x{height} frame needs {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            w: width,
            h: height,
            data: pixels,
        })
    }

    pub fn pixels(&self) -> &'a [u32] {
        self.data
    }
}

impl<'a> ImageView for Frame<'a> {
    type Pixel = u32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_matching_buffer() {
        let px = [0u32; 6];
        let frame = Frame::new(&px, 3, 2).unwrap();
        assert_eq!(frame.pixel_count(), 6);
        assert_eq!(frame.rows().count(), 2);
    }

    #[test]
    fn rejects_length_mismatch() {
        let px = [0u32; 5];
        assert!(matches!(
            Frame::new(&px, 3, 2),
            Err(FilterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_zero_dimension() {
        assert!(Frame::new(&[], 0, 4).is_err());
        assert!(Frame::new(&[], 4, 0).is_err());
    }

    #[test]
    fn rejects_overflowing_dimensions() {
        let px = [0u32; 4];
        assert!(matches!(
            Frame::new(&px, usize::MAX, 2),
            Err(FilterError::InvalidArgument(_))
        ));
    }
}
