//! Hysteresis linking: grow strong seeds through 8‑connected weak pixels.
use crate::edges::nms::{Suppressed, STRONG, WEAK};
use crate::error::Result;
use crate::image::GrayImageU8;

/// Value written for edge pixels in the output mask.
pub const EDGE: u8 = 255;

/// Produce the binary 0/255 edge mask from a suppression result.
///
/// Uses the seed vector as an explicit stack; weak pixels are promoted in
/// place so each pixel is pushed at most once and the stack stays within the
/// capacity reserved by `suppress_non_maxima`.
pub fn link_edges(suppressed: Suppressed) -> Result<GrayImageU8> {
    let Suppressed {
        w,
        h,
        mut classes,
        seeds,
    } = suppressed;
    let mut out = GrayImageU8::try_zeroed(w, h)?;
    let mut stack = seeds;

    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                let n = ny * w + nx;
                if classes[n] == WEAK {
                    classes[n] = STRONG;
                    stack.push(n);
                }
            }
        }
    }

    let data = out.as_bytes_mut();
    for (dst, &c) in data.iter_mut().zip(&classes) {
        if c == STRONG {
            *dst = EDGE;
        }
    }
    Ok(out)
}
