//! C ABI entry point for hosts that call the filter across a native bridge.
//!
//! Both buffers stay owned by the caller: the input is borrowed for the
//! duration of the call and the result is copied into `out`.
use crate::error::FilterError;
use crate::filter::process_frame;
use log::warn;
use std::mem::size_of;
use std::os::raw::c_int;
use std::slice;

pub const FRAME_EDGES_OK: c_int = 0;
pub const FRAME_EDGES_INVALID_ARGUMENT: c_int = 1;
pub const FRAME_EDGES_ALLOCATION_FAILURE: c_int = 2;

fn status_of(err: &FilterError) -> c_int {
    match err {
        FilterError::InvalidArgument(_) => FRAME_EDGES_INVALID_ARGUMENT,
        FilterError::AllocationFailure { .. } => FRAME_EDGES_ALLOCATION_FAILURE,
    }
}

/// Filter `width * height` packed ARGB pixels into `out`.
///
/// Returns `FRAME_EDGES_OK` on success; `out` is untouched on failure.
///
/// # Safety
///
/// `pixels` must point to `width * height` readable `u32`s and `out` to
/// `out_len` writable bytes; neither region may be mutated elsewhere during
/// the call.
#[no_mangle]
pub unsafe extern "C" fn frame_edges_process_frame(
    pixels: *const u32,
    width: c_int,
    height: c_int,
    out: *mut u8,
    out_len: usize,
) -> c_int {
    if pixels.is_null() || out.is_null() || width <= 0 || height <= 0 {
        return FRAME_EDGES_INVALID_ARGUMENT;
    }
    let Some(len) = (width as usize).checked_mul(height as usize) else {
        return FRAME_EDGES_INVALID_ARGUMENT;
    };
    let input_bytes = len.checked_mul(size_of::<u32>());
    if !matches!(input_bytes, Some(bytes) if bytes <= isize::MAX as usize) {
        return FRAME_EDGES_INVALID_ARGUMENT;
    }
    if out_len != len {
        return FRAME_EDGES_INVALID_ARGUMENT;
    }

    // SAFETY: non-null and sized by the caller's contract above.
    let input = unsafe { slice::from_raw_parts(pixels, len) };
    match process_frame(input, width as usize, height as usize) {
        Ok(bytes) => {
            // SAFETY: `out` holds `out_len == bytes.len()` writable bytes.
            let dst = unsafe { slice::from_raw_parts_mut(out, out_len) };
            dst.copy_from_slice(&bytes);
            FRAME_EDGES_OK
        }
        Err(err) => {
            warn!("frame_edges_process_frame failed: {err}");
            status_of(&err)
        }
    }
}
