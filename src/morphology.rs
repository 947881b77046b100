//! Grayscale dilation with a 3×3 structuring element.
//!
//! Each iteration replaces a pixel by the maximum over its neighbourhood.
//! Positions outside the image never contribute, so borders neither grow
//! nor shrink artificially. The square element is applied as two separable
//! 1D passes (rows, then columns).
use crate::error::Result;
use crate::image::{GrayImageU8, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuringElement {
    /// Full 3×3 neighbourhood (8-connected).
    #[default]
    Square,
    /// Centre plus its four axis neighbours.
    Cross,
}

/// Dilate `src` `iterations` times. Zero iterations returns a copy.
pub fn dilate(
    src: &GrayImageU8,
    element: StructuringElement,
    iterations: usize,
) -> Result<GrayImageU8> {
    let mut cur = GrayImageU8::try_zeroed(src.width(), src.height())?;
    cur.as_bytes_mut().copy_from_slice(src.as_bytes());
    if iterations == 0 || cur.pixel_count() == 0 {
        return Ok(cur);
    }
    let mut tmp = GrayImageU8::try_zeroed(src.width(), src.height())?;
    for _ in 0..iterations {
        match element {
            StructuringElement::Square => {
                max_rows(&cur, &mut tmp);
                max_cols(&tmp, &mut cur);
            }
            StructuringElement::Cross => {
                max_cross(&cur, &mut tmp);
                std::mem::swap(&mut cur, &mut tmp);
            }
        }
    }
    Ok(cur)
}

fn max3(row: &[u8], x: usize) -> u8 {
    let lo = x.saturating_sub(1);
    let hi = (x + 1).min(row.len() - 1);
    row[lo..=hi].iter().copied().max().unwrap_or(0)
}

fn max_rows(src: &GrayImageU8, dst: &mut GrayImageU8) {
    for (out, row) in dst.rows_mut().zip(src.rows()) {
        for (x, v) in out.iter_mut().enumerate() {
            *v = max3(row, x);
        }
    }
}

fn max_cols(src: &GrayImageU8, dst: &mut GrayImageU8) {
    let h = src.height();
    for y in 0..h {
        let above = src.row(y.saturating_sub(1));
        let centre = src.row(y);
        let below = src.row((y + 1).min(h - 1));
        let out = dst.row_mut(y);
        for x in 0..out.len() {
            out[x] = above[x].max(centre[x]).max(below[x]);
        }
    }
}

fn max_cross(src: &GrayImageU8, dst: &mut GrayImageU8) {
    let h = src.height();
    for y in 0..h {
        let above = src.row(y.saturating_sub(1));
        let centre = src.row(y);
        let below = src.row((y + 1).min(h - 1));
        let out = dst.row_mut(y);
        for x in 0..out.len() {
            out[x] = max3(centre, x).max(above[x]).max(below[x]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_dot(w: usize, h: usize, x: usize, y: usize) -> GrayImageU8 {
        let mut data = vec![0; w * h];
        data[y * w + x] = 255;
        GrayImageU8::new(w, h, data).unwrap()
    }

    fn lit(img: &GrayImageU8) -> usize {
        img.as_bytes().iter().filter(|&&b| b == 255).count()
    }

    #[test]
    fn square_grows_dot_to_block() {
        let out = dilate(&single_dot(7, 7, 3, 3), StructuringElement::Square, 1).unwrap();
        assert_eq!(lit(&out), 9);
        for y in 2..=4 {
            for x in 2..=4 {
                assert_eq!(out.row(y)[x], 255);
            }
        }
    }

    #[test]
    fn iterations_compound() {
        let out = dilate(&single_dot(9, 9, 4, 4), StructuringElement::Square, 2).unwrap();
        assert_eq!(lit(&out), 25);
        let out = dilate(&single_dot(9, 9, 4, 4), StructuringElement::Cross, 2).unwrap();
        assert_eq!(lit(&out), 13);
    }

    #[test]
    fn cross_grows_dot_to_plus() {
        let out = dilate(&single_dot(5, 5, 2, 2), StructuringElement::Cross, 1).unwrap();
        assert_eq!(lit(&out), 5);
        assert_eq!(out.row(1)[1], 0);
        assert_eq!(out.row(1)[2], 255);
    }

    #[test]
    fn corner_dot_is_clipped() {
        let out = dilate(&single_dot(4, 4, 0, 0), StructuringElement::Square, 1).unwrap();
        assert_eq!(lit(&out), 4);
    }

    #[test]
    fn zero_iterations_is_identity() {
        let src = single_dot(3, 2, 1, 1);
        assert_eq!(dilate(&src, StructuringElement::Square, 0).unwrap(), src);
    }

    #[test]
    fn single_row_and_column_images() {
        let row = single_dot(5, 1, 2, 0);
        let out = dilate(&row, StructuringElement::Square, 1).unwrap();
        assert_eq!(out.as_bytes(), &[0, 255, 255, 255, 0]);
        let col = single_dot(1, 5, 0, 4);
        let out = dilate(&col, StructuringElement::Cross, 1).unwrap();
        assert_eq!(out.as_bytes(), &[0, 0, 0, 255, 255]);
    }
}
