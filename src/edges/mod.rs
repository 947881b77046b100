//! Canny edge detection on single‑channel 8‑bit images.
//!
//! The detector is split into three passes, each usable on its own:
//!
//! - [`grad`]: 3×3 derivatives (Sobel/Scharr) with replicated borders and an
//!   L1 or L2 magnitude.
//! - [`nms`]: direction‑aligned non‑maximum suppression that also splits the
//!   survivors into weak candidates and strong seeds.
//! - [`hysteresis`]: 8‑connected growth from the seeds through weak pixels.
//!
//! The output is a binary mask holding 0 or 255 per pixel.
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use grad::{image_gradients, Grad, GradientKernel, GradientNorm};
pub use hysteresis::{link_edges, EDGE};
pub use nms::{suppress_non_maxima, Suppressed};

use crate::error::{FilterError, Result};
use crate::image::{GrayImageU8, ImageView};
use log::warn;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Thresholds and gradient options for [`detect_edges_canny`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CannyParams {
    /// Gradients above this are kept when linked to a strong pixel.
    pub low_threshold: f32,
    /// Gradients above this are always edges.
    pub high_threshold: f32,
    pub kernel: GradientKernel,
    pub norm: GradientNorm,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 100.0,
            high_threshold: 200.0,
            kernel: GradientKernel::Sobel,
            norm: GradientNorm::L1,
        }
    }
}

impl CannyParams {
    /// Check the thresholds and return them as `(low, high)`.
    ///
    /// Swapped thresholds are accepted and reordered.
    pub fn thresholds(&self) -> Result<(f32, f32)> {
        let (low, high) = (self.low_threshold, self.high_threshold);
        if !low.is_finite() || !high.is_finite() || low < 0.0 || high < 0.0 {
            return Err(FilterError::invalid(format!(
                "Canny thresholds must be finite and non-negative, got low={low} high={high}"
            )));
        }
        if low > high {
            warn!("Canny low threshold {low} exceeds high threshold {high}; swapping");
            return Ok((high, low));
        }
        Ok((low, high))
    }
}

pub struct CannyResult {
    /// Binary mask: `EDGE` (255) on edges, 0 elsewhere
    pub edges: GrayImageU8,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
}

/// Detect edges with gradients, non‑maximum suppression and hysteresis.
pub fn detect_edges_canny<I>(gray: &I, params: &CannyParams) -> Result<CannyResult>
where
    I: ImageView<Pixel = u8>,
{
    let (low, high) = params.thresholds()?;

    let gradient_start = Instant::now();
    let grad = image_gradients(gray, params.kernel, params.norm)?;
    let gradient_ms = gradient_start.elapsed().as_secs_f64() * 1000.0;

    let nms_start = Instant::now();
    let suppressed = suppress_non_maxima(&grad, low, high)?;
    let nms_ms = nms_start.elapsed().as_secs_f64() * 1000.0;
    drop(grad);

    let hysteresis_start = Instant::now();
    let edges = link_edges(suppressed)?;
    let hysteresis_ms = hysteresis_start.elapsed().as_secs_f64() * 1000.0;

    Ok(CannyResult {
        edges,
        gradient_ms,
        nms_ms,
        hysteresis_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canny(img: &GrayImageU8) -> GrayImageU8 {
        detect_edges_canny(img, &CannyParams::default())
            .unwrap()
            .edges
    }

    #[test]
    fn default_thresholds() {
        assert_eq!(CannyParams::default().thresholds().unwrap(), (100.0, 200.0));
    }

    #[test]
    fn swapped_thresholds_are_reordered() {
        let params = CannyParams {
            low_threshold: 200.0,
            high_threshold: 50.0,
            ..Default::default()
        };
        assert_eq!(params.thresholds().unwrap(), (50.0, 200.0));
    }

    #[test]
    fn invalid_thresholds_are_rejected() {
        for (low, high) in [(-1.0, 10.0), (f32::NAN, 10.0), (1.0, f32::INFINITY)] {
            let params = CannyParams {
                low_threshold: low,
                high_threshold: high,
                ..Default::default()
            };
            assert!(matches!(
                params.thresholds(),
                Err(FilterError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = GrayImageU8::new(9, 7, vec![140; 63]).unwrap();
        assert!(canny(&img).as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn weak_only_step_is_rejected() {
        let (w, h) = (12, 6);
        let data = (0..w * h).map(|i| if i % w < 6 { 90 } else { 120 }).collect();
        let img = GrayImageU8::new(w, h, data).unwrap();
        assert!(canny(&img).as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn horizontal_step_marks_one_row() {
        let (w, h) = (7, 8);
        let data = (0..w * h).map(|i| if i / w < 4 { 10 } else { 200 }).collect();
        let img = GrayImageU8::new(w, h, data).unwrap();
        let edges = canny(&img);
        for (y, row) in edges.rows().enumerate() {
            let expected = if y == 3 { EDGE } else { 0 };
            assert!(row.iter().all(|&b| b == expected), "row {y}: {row:?}");
        }
    }

    #[test]
    fn weak_segment_linked_to_strong_segment_survives() {
        // A vertical boundary whose contrast drops from strong to weak halfway
        // down. The weak lower half only survives through hysteresis.
        let (w, h) = (10, 12);
        let data = (0..w * h)
            .map(|i| {
                let (x, y) = (i % w, i / w);
                match (x < 5, y < 6) {
                    (true, _) => 0,
                    (false, true) => 255,
                    (false, false) => 40,
                }
            })
            .collect();
        let img = GrayImageU8::new(w, h, data).unwrap();
        let linked = detect_edges_canny(
            &img,
            &CannyParams {
                low_threshold: 100.0,
                high_threshold: 500.0,
                ..Default::default()
            },
        )
        .unwrap()
        .edges;
        let strong_only = detect_edges_canny(
            &img,
            &CannyParams {
                low_threshold: 500.0,
                high_threshold: 500.0,
                ..Default::default()
            },
        )
        .unwrap()
        .edges;
        assert!(
            linked.row(h - 1).iter().any(|&b| b == EDGE),
            "weak pixels should be promoted"
        );
        assert!(strong_only.row(h - 1).iter().all(|&b| b == 0));
        assert!(strong_only.row(0).iter().any(|&b| b == EDGE));
    }
}
