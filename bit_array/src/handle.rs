//! Nullable-handle entry points.
//!
//! These mirror a pointer-style API where the array lives behind a handle that may
//! be null: every function accepts an absent array, and the resizing ones
//! return the value the caller should store back into its handle. Allocation
//! failures are logged at `warn` and never lose the caller's data.
//!
//! ```rust
//! use bit_array::InitMode;
//! use bit_array::handle::{self, allocate, grow, read_bit, shrink, write_bit};
//!
//! let mut bits = allocate(3, InitMode::Zeroes);
//! write_bit(bits.as_mut(), 0, true);
//! bits = grow(bits, 5, InitMode::Ones);
//!
//! assert_eq!(handle::capacity(bits.as_ref()), 16);
//! assert_eq!(read_bit(bits.as_ref(), 0), Some(true));
//! assert_eq!(read_bit(bits.as_ref(), 16), None);
//!
//! bits = shrink(bits, 64);
//! assert!(bits.is_none());
//! assert_eq!(read_bit(bits.as_ref(), 0), None);
//! ```

use crate::render::Report;
use crate::{BitArray, InitMode};

pub fn allocate(occupied: usize, mode: InitMode) -> Option<BitArray> {
    match BitArray::create(occupied, mode) {
        Ok(array) => Some(array),
        Err(err) => {
            log::warn!("allocating {} bits failed: {}", occupied, err);
            None
        }
    }
}

/// Always returns `None`, ready to be stored back into the handle.
pub fn release(array: Option<BitArray>) -> Option<BitArray> {
    if let Some(array) = array {
        array.release();
    }
    None
}

pub fn duplicate(array: Option<&BitArray>) -> Option<BitArray> {
    let array = array?;
    match array.duplicate() {
        Ok(copy) => Some(copy),
        Err(err) => {
            log::warn!("copying a {}-bit array failed: {}", array.capacity(), err);
            None
        }
    }
}

/// Absent arrays are allocated fresh with `amount` occupied bits. On failure
/// the pre-growth array comes back.
pub fn grow(array: Option<BitArray>, amount: usize, mode: InitMode) -> Option<BitArray> {
    if amount == 0 {
        return array;
    }
    match array {
        None => allocate(amount, mode),
        Some(array) => match array.extend(amount, mode) {
            Ok(grown) => Some(grown),
            Err(rejected) => {
                log::warn!("growing by {} bits failed: {}", amount, rejected.error());
                Some(rejected.into_inner())
            }
        },
    }
}

/// `None` once `amount` reaches the capacity. On failure the pre-shrink
/// array comes back.
pub fn shrink(array: Option<BitArray>, amount: usize) -> Option<BitArray> {
    match array?.contract(amount) {
        Ok(shrunk) => shrunk,
        Err(rejected) => {
            log::warn!("shrinking by {} bits failed: {}", amount, rejected.error());
            Some(rejected.into_inner())
        }
    }
}

pub fn write_bit(array: Option<&mut BitArray>, index: usize, value: bool) {
    if let Some(array) = array {
        array.set_bit(index, value);
    }
}

pub fn read_bit(array: Option<&BitArray>, index: usize) -> Option<bool> {
    array?.get_bit(index)
}

pub fn capacity(array: Option<&BitArray>) -> usize {
    array.map_or(0, BitArray::capacity)
}

pub fn occupancy(array: Option<&BitArray>) -> usize {
    array.map_or(0, BitArray::occupancy)
}

pub fn report(array: Option<&BitArray>) -> Report<'_> {
    Report::new(array)
}
