//! The low-level allocation primitives behind [`Container`](crate::Container).
//!
//! Each function reserves exactly the room it needs up front and reports
//! failure as [`ContainerError::AllocationFailed`]; nothing here aborts on
//! out-of-memory.

use bytemuck::{Pod, Zeroable};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::ContainerError;

/// Reserve room for exactly `len` elements in a fresh, empty vector.
pub fn try_with_capacity<T: Pod>(len: usize) -> Result<Vec<T>, ContainerError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len).map_err(|_| {
        log::trace!("reserving {} elements failed", len);
        ContainerError::AllocationFailed { elements: len }
    })?;
    Ok(vec)
}

/// Allocate `len` zero-initialized elements.
pub fn try_zeroed<T: Pod>(len: usize) -> Result<Vec<T>, ContainerError> {
    let mut vec = try_with_capacity(len)?;
    vec.resize(len, T::zeroed());
    Ok(vec)
}

/// Allocate a verbatim copy of `src`.
pub fn try_copy<T: Pod>(src: &[T]) -> Result<Vec<T>, ContainerError> {
    let mut vec = try_with_capacity(src.len())?;
    vec.extend_from_slice(src);
    Ok(vec)
}

/// Allocate `len` elements holding the longest prefix of `src` that fits,
/// followed by zeroes.
pub fn try_resized<T: Pod>(src: &[T], len: usize) -> Result<Vec<T>, ContainerError> {
    let keep = src.len().min(len);
    let mut vec = try_with_capacity(len)?;
    vec.extend_from_slice(&src[..keep]);
    vec.resize(len, T::zeroed());
    Ok(vec)
}
