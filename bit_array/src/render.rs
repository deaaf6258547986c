//! Text rendering of a bit array as `0`/`1` characters, left to right.
//!
//! ```rust
//! use bit_array::{BitArray, InitMode};
//!
//! let bits = BitArray::create(10, InitMode::Ones)?;
//! assert_eq!(bits.to_string(), "[ 1111 1111 1100 0000]");
//! assert_eq!(bits.grouped(8).to_string(), "[ 11111111 11000000]");
//! assert_eq!(bits.grouped(0).to_string(), "[1111111111000000]");
//! # Ok::<(), bit_array::BitArrayError>(())
//! ```

use core::fmt;

use crate::BitArray;

/// Characters per group in the default rendering.
pub const GROUPING: usize = 4;

/// Renders every bit slot, a space in front of each group of `width` bits.
/// A width of 0 turns grouping off.
#[derive(Copy, Clone, Debug)]
pub struct Grouped<'a> {
    array: &'a BitArray,
    width: usize,
}

impl fmt::Display for Grouped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, bit) in self.array.iter().enumerate() {
            if self.width > 0 && index % self.width == 0 {
                f.write_str(" ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

/// The contents banner: occupancy and capacity, then the grouped bits.
/// An absent array renders as `[NULL]`.
#[derive(Copy, Clone, Debug)]
pub struct Report<'a> {
    array: Option<&'a BitArray>,
}

impl<'a> Report<'a> {
    pub fn new(array: Option<&'a BitArray>) -> Self {
        Report { array }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.array {
            Some(array) => write!(
                f,
                "Bit Array Contents (occupied={}, total={}):\n {}",
                array.occupancy(),
                array.capacity(),
                array
            ),
            None => f.write_str("[NULL]"),
        }
    }
}

impl BitArray {
    pub fn grouped(&self, width: usize) -> Grouped<'_> {
        Grouped { array: self, width }
    }

    pub fn report(&self) -> Report<'_> {
        Report::new(Some(self))
    }
}

impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grouped(GROUPING), f)
    }
}
