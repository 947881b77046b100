#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod error;
pub mod filter;
pub mod image;

// Building blocks of the transform, usable on their own.
pub mod color;
pub mod edges;
pub mod ffi;
pub mod morphology;

// --- High-level re-exports -------------------------------------------------

pub use crate::config::EdgeFilterParams;
pub use crate::error::{FilterError, Result};
pub use crate::filter::{
    process_frame, process_frame_i32, EdgeMap, FrameEdgeFilter, FrameReport,
};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use frame_edges::prelude::*;
///
/// let (w, h) = (4usize, 4usize);
/// let pixels = vec![0xFF00_0000u32; w * h];
/// let filter = FrameEdgeFilter::new(EdgeFilterParams::default()).unwrap();
/// let edges = filter.process_frame(&pixels, w, h).unwrap();
/// assert_eq!(edges.as_bytes().len(), w * h);
/// ```
pub mod prelude {
    pub use crate::color::PixelLayout;
    pub use crate::image::{Frame, GrayImageU8, ImageView};
    pub use crate::{EdgeFilterParams, EdgeMap, FilterError, FrameEdgeFilter};
}
