//! Error taxonomy for the frame filter.
//!
//! Both failures are local and synchronous: the call either produces a full
//! edge map or reports one of these and leaves nothing behind.
use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilterError {
    /// Dimensions, buffer lengths or parameters are inconsistent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A working or output buffer could not be reserved.
    #[error("failed to allocate {bytes} bytes")]
    AllocationFailure {
        bytes: usize,
        #[source]
        source: TryReserveError,
    },
}

pub type Result<T> = std::result::Result<T, FilterError>;

impl FilterError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FilterError::InvalidArgument(msg.into())
    }
}

/// Reserve exactly `len` elements and fill them with `value`.
///
/// Resource exhaustion surfaces as `AllocationFailure` instead of aborting.
pub(crate) fn try_filled_vec<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buf = try_with_capacity(len)?;
    buf.resize(len, value);
    Ok(buf)
}

/// Empty vector with room for exactly `capacity` elements.
pub(crate) fn try_with_capacity<T>(capacity: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity)
        .map_err(|source| FilterError::AllocationFailure {
            bytes: capacity.saturating_mul(std::mem::size_of::<T>()),
            source,
        })?;
    Ok(buf)
}
