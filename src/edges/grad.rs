//! Image gradients (Sobel/Scharr) with L1 or L2 magnitude.
//!
//! - Convolves a 3×3 kernel pair (`X` and `Y`) with border replication.
//! - Outputs per‑pixel `gx`, `gy` and the magnitude under the chosen norm.
//!
//! On 8-bit input every component is an integer of modest size, so the f32
//! buffers hold them exactly and downstream comparisons are exact.
//!
//! Complexity: O(W·H) per pass; memory: three float buffers.
use crate::error::Result;
use crate::image::{ImageF32, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

const SCHARR_KERNEL_X: Kernel3 = [[-3.0, 0.0, 3.0], [-10.0, 0.0, 10.0], [-3.0, 0.0, 3.0]];
const SCHARR_KERNEL_Y: Kernel3 = [[-3.0, -10.0, -3.0], [0.0, 0.0, 0.0], [3.0, 10.0, 3.0]];

/// Derivative kernel used for the gradient pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientKernel {
    #[default]
    Sobel,
    /// Better rotational symmetry; responses are ~4× larger than Sobel.
    Scharr,
}

impl GradientKernel {
    fn kernels(self) -> (&'static Kernel3, &'static Kernel3) {
        match self {
            GradientKernel::Sobel => (&SOBEL_KERNEL_X, &SOBEL_KERNEL_Y),
            GradientKernel::Scharr => (&SCHARR_KERNEL_X, &SCHARR_KERNEL_Y),
        }
    }
}

/// Norm combining `gx` and `gy` into a magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientNorm {
    /// `|gx| + |gy|`
    #[default]
    L1,
    /// `sqrt(gx² + gy²)`
    L2,
}

impl GradientNorm {
    #[inline]
    fn magnitude(self, gx: f32, gy: f32) -> f32 {
        match self {
            GradientNorm::L1 => gx.abs() + gy.abs(),
            GradientNorm::L2 => (gx * gx + gy * gy).sqrt(),
        }
    }
}

/// Per‑pixel gradient buffers.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: ImageF32,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: ImageF32,
    /// Magnitude per pixel under the selected norm
    pub mag: ImageF32,
}

/// Compute gradients of a single‑channel 8‑bit image.
pub fn image_gradients<I>(l: &I, kernel: GradientKernel, norm: GradientNorm) -> Result<Grad>
where
    I: ImageView<Pixel = u8>,
{
    let w = l.width();
    let h = l.height();
    let mut gx = ImageF32::try_new(w, h)?;
    let mut gy = ImageF32::try_new(w, h)?;
    let mut mag = ImageF32::try_new(w, h)?;

    if w == 0 || h == 0 {
        return Ok(Grad { gx, gy, mag });
    }

    let (kernel_x, kernel_y) = kernel.kernels();
    for y in 0..h {
        let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
        let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, yy_row) in rows.iter().enumerate() {
                let kx_row = &kernel_x[ky];
                let ky_row = &kernel_y[ky];
                let s = [
                    yy_row[x_idx[0]] as f32,
                    yy_row[x_idx[1]] as f32,
                    yy_row[x_idx[2]] as f32,
                ];
                sum_x += s[0] * kx_row[0] + s[1] * kx_row[1] + s[2] * kx_row[2];
                sum_y += s[0] * ky_row[0] + s[1] * ky_row[1] + s[2] * ky_row[2];
            }

            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = norm.magnitude(sum_x, sum_y);
        }
    }

    Ok(Grad { gx, gy, mag })
}
