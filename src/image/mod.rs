//! Image containers used by the filter.
//!
//! - `Frame`: borrowed view of caller-owned packed 32-bit pixels.
//! - `GrayImageU8`: owned single-channel 8-bit image.
//! - `ImageF32`: owned float buffer for gradients.
//! - `io`: PNG/JPEG and JSON helpers for tooling.
pub mod f32;
pub mod frame;
pub mod io;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::frame::Frame;
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
pub use self::u8::GrayImageU8;
