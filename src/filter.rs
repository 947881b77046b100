//! The frame edge filter: packed colour frame in, thickened edge map out.
//!
//! A call runs five passes over freshly reserved buffers:
//!
//! 1. unpack the packed pixels and convert to luma,
//! 2. gradients,
//! 3. non‑maximum suppression,
//! 4. hysteresis,
//! 5. dilation.
//!
//! Nothing is cached between calls, so one filter may be shared across
//! threads and every call with the same input yields the same bytes.
use crate::color::frame_to_gray;
use crate::config::EdgeFilterParams;
use crate::edges::detect_edges_canny;
use crate::error::{FilterError, Result};
use crate::image::{Frame, GrayImageU8, ImageView};
use crate::morphology::dilate;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Single‑channel edge mask with the dimensions of its source frame.
///
/// Every byte is 0 (no edge) or 255 (edge), row‑major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap(GrayImageU8);

impl EdgeMap {
    pub fn width(&self) -> usize {
        self.0.width()
    }

    pub fn height(&self) -> usize {
        self.0.height()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_raw()
    }

    pub fn as_image(&self) -> &GrayImageU8 {
        &self.0
    }

    pub fn edge_pixel_count(&self) -> usize {
        self.0.as_bytes().iter().filter(|&&b| b != 0).count()
    }
}

/// Per‑call statistics for tooling.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
    pub color_ms: f64,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
    pub dilation_ms: f64,
    pub total_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct FrameEdgeFilter {
    params: EdgeFilterParams,
}

impl FrameEdgeFilter {
    /// Build a filter after checking the Canny thresholds. Swapped
    /// thresholds are stored in order.
    pub fn new(mut params: EdgeFilterParams) -> Result<Self> {
        let (low, high) = params.canny.thresholds()?;
        params.canny.low_threshold = low;
        params.canny.high_threshold = high;
        Ok(Self { params })
    }

    /// Run the transform on `width × height` packed pixels.
    pub fn process_frame(&self, pixels: &[u32], width: usize, height: usize) -> Result<EdgeMap> {
        self.process_frame_with_report(pixels, width, height)
            .map(|(map, _)| map)
    }

    /// Same as [`process_frame`](Self::process_frame), also returning timings.
    pub fn process_frame_with_report(
        &self,
        pixels: &[u32],
        width: usize,
        height: usize,
    ) -> Result<(EdgeMap, FrameReport)> {
        let total_start = Instant::now();
        let frame = Frame::new(pixels, width, height)?;

        let color_start = Instant::now();
        let gray = frame_to_gray(&frame, self.params.layout)?;
        let color_ms = color_start.elapsed().as_secs_f64() * 1000.0;

        let canny = detect_edges_canny(&gray, &self.params.canny)?;
        drop(gray);

        let dilation_start = Instant::now();
        let thick = dilate(&canny.edges, self.params.element, self.params.thickness)?;
        let dilation_ms = dilation_start.elapsed().as_secs_f64() * 1000.0;

        let map = EdgeMap(thick);
        debug_assert_eq!(map.as_bytes().len(), frame.pixel_count());

        let report = FrameReport {
            width,
            height,
            edge_pixels: map.edge_pixel_count(),
            color_ms,
            gradient_ms: canny.gradient_ms,
            nms_ms: canny.nms_ms,
            hysteresis_ms: canny.hysteresis_ms,
            dilation_ms,
            total_ms: total_start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "FrameEdgeFilter::process_frame {}x{} edges={} color={:.3}ms grad={:.3}ms nms={:.3}ms hyst={:.3}ms dilate={:.3}ms total={:.3}ms",
            width,
            height,
            report.edge_pixels,
            report.color_ms,
            report.gradient_ms,
            report.nms_ms,
            report.hysteresis_ms,
            report.dilation_ms,
            report.total_ms
        );
        Ok((map, report))
    }
}

/// Run the default filter and return the raw edge bytes.
///
/// Fails with [`FilterError::InvalidArgument`] when `pixels.len()` is not
/// `width * height` or a dimension is zero.
pub fn process_frame(pixels: &[u32], width: usize, height: usize) -> Result<Vec<u8>> {
    FrameEdgeFilter::default()
        .process_frame(pixels, width, height)
        .map(EdgeMap::into_bytes)
}

/// [`process_frame`] for hosts that pass signed dimensions.
pub fn process_frame_i32(pixels: &[u32], width: i32, height: i32) -> Result<Vec<u8>> {
    let (w, h) = match (usize::try_from(width), usize::try_from(height)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(FilterError::invalid(format!(
                "frame dimensions must be positive, got {width}x{height}"
            )))
        }
    };
    process_frame(pixels, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::CannyParams;

    const BLACK: u32 = 0xFF00_0000;
    const WHITE: u32 = 0xFFFF_FFFF;

    #[test]
    fn two_by_two_black_over_white() {
        let out = process_frame(&[BLACK, BLACK, WHITE, WHITE], 2, 2).unwrap();
        assert_eq!(out, vec![255; 4]);
    }

    #[test]
    fn single_pixel_frame_is_blank() {
        assert_eq!(process_frame(&[WHITE], 1, 1).unwrap(), vec![0]);
    }

    #[test]
    fn thickness_zero_returns_thin_edges() {
        let (w, h) = (8, 4);
        let px: Vec<u32> = (0..w * h)
            .map(|i| if i % w < 4 { BLACK } else { WHITE })
            .collect();
        let filter = FrameEdgeFilter::new(EdgeFilterParams {
            thickness: 0,
            ..Default::default()
        })
        .unwrap();
        let map = filter.process_frame(&px, w, h).unwrap();
        assert_eq!(map.edge_pixel_count(), h);
        assert!(map.as_image().rows().all(|row| row[3] == 255));
    }

    #[test]
    fn report_matches_map() {
        let (w, h) = (6, 6);
        let px: Vec<u32> = (0..w * h)
            .map(|i| if i / w < 3 { BLACK } else { WHITE })
            .collect();
        let (map, report) = FrameEdgeFilter::default()
            .process_frame_with_report(&px, w, h)
            .unwrap();
        assert_eq!((report.width, report.height), (w, h));
        assert_eq!(report.edge_pixels, map.edge_pixel_count());
        // Edge on row 2, dilated onto rows 1..=3.
        assert_eq!(report.edge_pixels, 3 * w);
    }

    #[test]
    fn invalid_thresholds_rejected_at_construction() {
        let params = EdgeFilterParams {
            canny: CannyParams {
                low_threshold: -5.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(
            FrameEdgeFilter::new(params),
            Err(FilterError::InvalidArgument(_))
        ));
    }

    #[test]
    fn negative_signed_dimensions_rejected() {
        assert!(matches!(
            process_frame_i32(&[BLACK; 4], -2, -2),
            Err(FilterError::InvalidArgument(_))
        ));
        assert_eq!(process_frame_i32(&[BLACK; 4], 2, 2).unwrap(), vec![0; 4]);
    }
}
