//! Non‑maximum suppression on gradient magnitude with direction alignment.
//!
//! Each pixel whose magnitude exceeds the low threshold is compared against
//! its two neighbours along the gradient direction, quantised to one of four
//! sectors (0°, 45°, 90°, 135°). Survivors are classified as weak candidates
//! or strong seeds for hysteresis.
//!
//! Magnitude outside the image reads as 0, so the outermost pixels take part
//! like any other. The sector test runs in 15-bit fixed point on the integer
//! derivatives so that it is exact for 8-bit input.
use crate::edges::grad::Grad;
use crate::error::{try_filled_vec, try_with_capacity, Result};
use crate::image::ImageView;

/// Pixel is not an edge.
pub const NOT_EDGE: u8 = 0;
/// Survived NMS with `low < mag <= high`; an edge only if linked to a seed.
pub const WEAK: u8 = 1;
/// Survived NMS with `mag > high`.
pub const STRONG: u8 = 2;

const SECTOR_SHIFT: u32 = 15;
/// `tan(22.5°)` in `SECTOR_SHIFT` fixed point.
const TAN_22_5_FIXED: i64 = 13573;

/// Result of suppression: a per‑pixel class map and the strong seed indices.
#[derive(Clone, Debug)]
pub struct Suppressed {
    pub w: usize,
    pub h: usize,
    /// One of `NOT_EDGE`, `WEAK`, `STRONG` per pixel, row‑major
    pub classes: Vec<u8>,
    /// Linear indices of every `STRONG` pixel, in scan order
    pub seeds: Vec<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sector {
    Horizontal,
    Vertical,
    /// Gradient components share a sign: neighbours at (-1,-1) and (+1,+1).
    DiagonalDown,
    /// Opposite signs: neighbours at (+1,-1) and (-1,+1).
    DiagonalUp,
}

#[inline]
fn sector(gx: f32, gy: f32) -> Sector {
    let gx = gx as i64;
    let gy = gy as i64;
    let xs = gx.abs();
    let ys = gy.abs() << SECTOR_SHIFT;
    let tg22x = xs * TAN_22_5_FIXED;
    if ys < tg22x {
        return Sector::Horizontal;
    }
    let tg67x = tg22x + (xs << (SECTOR_SHIFT + 1));
    if ys > tg67x {
        Sector::Vertical
    } else if (gx ^ gy) < 0 {
        Sector::DiagonalUp
    } else {
        Sector::DiagonalDown
    }
}

/// Classify every pixel. Thresholds compare strictly: `mag > low`, `mag > high`.
pub fn suppress_non_maxima(grad: &Grad, low: f32, high: f32) -> Result<Suppressed> {
    let w = grad.mag.w;
    let h = grad.mag.h;
    let mut classes = try_filled_vec(w * h, NOT_EDGE)?;
    // Doubles as the hysteresis stack. Every pixel is pushed at most once
    // across seeding and linking, so it never grows past this reservation.
    let mut seeds = try_with_capacity(w * h)?;

    let at = |x: isize, y: isize| -> f32 {
        if x < 0 || y < 0 || x as usize >= w || y as usize >= h {
            0.0
        } else {
            grad.mag.get(x as usize, y as usize)
        }
    };

    for y in 0..h {
        let mag_row = grad.mag.row(y);
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        let yi = y as isize;
        for x in 0..w {
            let m = mag_row[x];
            if m <= low {
                continue;
            }
            let xi = x as isize;
            // Strict against the preceding neighbour, non-strict against the
            // following one, so a flat two-pixel ridge keeps exactly one pixel.
            let is_max = match sector(gx_row[x], gy_row[x]) {
                Sector::Horizontal => m > at(xi - 1, yi) && m >= at(xi + 1, yi),
                Sector::Vertical => m > at(xi, yi - 1) && m >= at(xi, yi + 1),
                Sector::DiagonalDown => m > at(xi - 1, yi - 1) && m > at(xi + 1, yi + 1),
                Sector::DiagonalUp => m > at(xi + 1, yi - 1) && m > at(xi - 1, yi + 1),
            };
            if !is_max {
                continue;
            }
            let idx = y * w + x;
            if m > high {
                classes[idx] = STRONG;
                seeds.push(idx);
            } else {
                classes[idx] = WEAK;
            }
        }
    }

    Ok(Suppressed {
        w,
        h,
        classes,
        seeds,
    })
}
