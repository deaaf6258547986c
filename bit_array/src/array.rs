//! The bit array engine: a byte buffer packed eight bits per byte, MSB first.
//!
//! # Examples
//!
//! ## Allocation
//!
//! ```rust
//! use bit_array::{BitArray, InitMode};
//!
//! let bits = BitArray::create(10, InitMode::Ones)?;
//! assert_eq!(bits.capacity(), 16);
//! assert_eq!(bits.occupancy(), 10);
//! assert_eq!(bits.as_bytes(), &[0b1111_1111, 0b1100_0000]);
//! # Ok::<(), bit_array::BitArrayError>(())
//! ```
//!
//! ## Resizing
//!
//! Resizes consume the array and hand back its replacement. If the new buffer
//! can't be allocated the original comes back inside the error.
//!
//! ```rust
//! use bit_array::{BitArray, InitMode};
//!
//! let bits = BitArray::create(3, InitMode::Zeroes)?;
//! let bits = bits.extend(5, InitMode::Ones).map_err(|r| r.into_parts().1)?;
//! assert_eq!(bits.capacity(), 16);
//! assert_eq!(bits.occupancy(), 3);
//!
//! let shrunk = bits.contract(4).map_err(|r| r.into_parts().1)?;
//! assert_eq!(shrunk.map(|b| b.capacity()), Some(8));
//! # Ok::<(), bit_array::BitArrayError>(())
//! ```

use raw_bytes::Container;

use crate::bit_ops::{self, BYTE_BITS, FULL_BYTE};
use crate::index::BitIndex;
use crate::random::RandomSource;
#[cfg(feature = "std")]
use crate::random::ClockSeeded;
use crate::{BitArrayError, InitMode, Rejected};

type Result<T> = core::result::Result<T, BitArrayError>;

/// A fixed-capacity run of bits with an occupancy marker.
///
/// Capacity is always a whole number of bytes. Bits between the occupancy and
/// the capacity are padding and stay 0 unless written explicitly.
#[derive(Debug, PartialEq, Eq)]
pub struct BitArray {
    buffer: Container<u8>,
    occupied: usize,
}

impl BitArray {
    /// Allocates room for `occupied` bits, rounded up to whole bytes, and
    /// initializes the first `occupied` of them according to `mode`.
    ///
    /// Random bits come from the system-clock seeded source.
    ///
    /// # Errors
    ///
    /// `AllocationFailed` when the buffer can't be reserved, and
    /// `CapacityOverflow` when the rounded capacity doesn't fit in `usize`.
    #[cfg(feature = "std")]
    pub fn create(occupied: usize, mode: InitMode) -> Result<Self> {
        Self::create_with(occupied, mode, &mut ClockSeeded::new())
    }

    /// Like [`create`](Self::create), drawing random bits from `source`.
    pub fn create_with<S>(occupied: usize, mode: InitMode, source: &mut S) -> Result<Self>
    where
        S: RandomSource + ?Sized,
    {
        let size = bit_ops::round_up8(occupied)
            .ok_or(BitArrayError::CapacityOverflow { requested: occupied })?;
        let buffer = Container::zeroed(size / BYTE_BITS)?;
        let mut array = BitArray { buffer, occupied };

        match mode {
            InitMode::Zeroes => {}
            InitMode::Ones => array.fill_leading_ones(),
            InitMode::Random => array.fill_random(0, occupied, source),
        }

        log::trace!(
            "created {:?} bit array: occupied={}, size={}",
            mode,
            array.occupied,
            size
        );
        Ok(array)
    }

    /// Allocates an independent copy with the same bytes, capacity and occupancy.
    ///
    /// # Errors
    ///
    /// `AllocationFailed` when the copy can't be reserved; `self` is unaffected.
    pub fn duplicate(&self) -> Result<Self> {
        Ok(BitArray {
            buffer: self.buffer.try_clone()?,
            occupied: self.occupied,
        })
    }

    /// Releases the buffer.
    ///
    /// Dropping the array does the same; this exists so call sites can say so.
    pub fn release(self) {
        log::trace!("releasing {}-bit array", self.capacity());
    }

    /// Grows the capacity by `amount` bits, rounded up to whole bytes.
    ///
    /// The existing bytes are kept. `mode` is then applied to `amount` bits
    /// starting at the current occupancy, not at the old capacity, so any
    /// padding bits between the two are overwritten first. Occupancy itself is
    /// left as it was. `amount == 0` returns the array untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::{BitArray, InitMode};
    ///
    /// let bits = BitArray::create(3, InitMode::Zeroes).unwrap();
    /// let bits = bits.extend(5, InitMode::Ones).unwrap();
    ///
    /// assert_eq!(bits.as_bytes(), &[0b0001_1111, 0]);
    /// assert_eq!(bits.occupancy(), 3);
    /// ```
    ///
    /// # Errors
    ///
    /// On allocation failure the untouched original is returned inside the
    /// [`Rejected`] error.
    #[cfg(feature = "std")]
    pub fn extend(self, amount: usize, mode: InitMode) -> core::result::Result<Self, Rejected> {
        self.extend_with(amount, mode, &mut ClockSeeded::new())
    }

    /// Like [`extend`](Self::extend), drawing random bits from `source`.
    pub fn extend_with<S>(
        self,
        amount: usize,
        mode: InitMode,
        source: &mut S,
    ) -> core::result::Result<Self, Rejected>
    where
        S: RandomSource + ?Sized,
    {
        if amount == 0 {
            return Ok(self);
        }

        let buffer = match self.grown_buffer(amount) {
            Ok(buffer) => buffer,
            Err(err) => return Err(Rejected::new(self, err)),
        };
        let start = self.occupied;
        let mut array = BitArray {
            buffer,
            occupied: self.occupied,
        };

        match mode {
            InitMode::Zeroes => {}
            InitMode::Ones => array.fill_ones(start, amount),
            InitMode::Random => array.fill_random(start, amount, source),
        }

        log::debug!(
            "extended bit array by {} bits: size {} -> {}, occupied={}",
            amount,
            self.capacity(),
            array.capacity(),
            array.occupied
        );
        Ok(array)
    }

    fn grown_buffer(&self, amount: usize) -> Result<Container<u8>> {
        let size = bit_ops::round_up8(amount)
            .and_then(|extra| self.capacity().checked_add(extra))
            .ok_or(BitArrayError::CapacityOverflow { requested: amount })?;
        Ok(self.buffer.resized(size / BYTE_BITS)?)
    }

    /// Shrinks the capacity by `amount` bits, rounded up to whole bytes.
    ///
    /// The surviving leading bytes are kept and the occupancy is clamped to the
    /// new capacity. Returns `Ok(None)` when `amount` reaches the capacity: the
    /// whole array is released.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::{BitArray, InitMode};
    ///
    /// let bits = BitArray::create(20, InitMode::Zeroes).unwrap();
    /// let bits = bits.contract(4).unwrap().unwrap();
    /// assert_eq!((bits.capacity(), bits.occupancy()), (16, 16));
    ///
    /// assert!(bits.contract(25).unwrap().is_none());
    /// ```
    ///
    /// # Errors
    ///
    /// On allocation failure the untouched original is returned inside the
    /// [`Rejected`] error.
    pub fn contract(self, amount: usize) -> core::result::Result<Option<Self>, Rejected> {
        if amount >= self.capacity() {
            log::debug!(
                "contracting {}-bit array by {} bits releases it",
                self.capacity(),
                amount
            );
            self.release();
            return Ok(None);
        }

        // amount < capacity, so this never underflows
        let bytes = self.buffer.len() - bit_ops::bytes_for(amount);
        let buffer = match self.buffer.resized(bytes) {
            Ok(buffer) => buffer,
            Err(err) => return Err(Rejected::new(self, err.into())),
        };
        let size = bytes * BYTE_BITS;
        let array = BitArray {
            buffer,
            occupied: self.occupied.min(size),
        };

        log::debug!(
            "contracted bit array by {} bits: size {} -> {}, occupied {} -> {}",
            amount,
            self.capacity(),
            size,
            self.occupied,
            array.occupied
        );
        Ok(Some(array))
    }

    /// Writes `value` at `index`. Indices at or past the capacity are ignored.
    #[inline]
    pub fn set_bit(&mut self, index: usize, value: bool) {
        let at = BitIndex::new(index);
        if let Ok(byte) = self.buffer.get_mut(at.byte) {
            *byte = bit_ops::write(*byte, at.offset, value);
        }
    }

    /// Reads the bit at `index`, or `None` past the capacity.
    #[inline]
    pub fn get_bit(&self, index: usize) -> Option<bool> {
        let at = BitIndex::new(index);
        self.buffer
            .get(at.byte)
            .ok()
            .map(|&byte| bit_ops::read(byte, at.offset))
    }

    /// Total bit slots, always a multiple of 8.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len() * BYTE_BITS
    }

    /// Number of bits considered in use.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.occupied
    }

    /// `true` when there are no bit slots at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The packed bytes, first bit in the MSB of the first byte.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Iterates over every bit slot up to the capacity, padding included.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            array: self,
            index: 0,
        }
    }

    fn fill_leading_ones(&mut self) {
        let whole = self.occupied / BYTE_BITS;
        self.buffer.as_mut_slice()[..whole].fill(FULL_BYTE);
        self.fill_ones(whole * BYTE_BITS, self.occupied % BYTE_BITS);
    }

    fn fill_ones(&mut self, start: usize, count: usize) {
        for index in (start..).take(count) {
            self.set_bit(index, true);
        }
    }

    fn fill_random<S>(&mut self, start: usize, count: usize, source: &mut S)
    where
        S: RandomSource + ?Sized,
    {
        source.reseed();
        for index in (start..).take(count) {
            let bit = source.next_bit();
            self.set_bit(index, bit);
        }
    }
}

pub struct Bits<'a> {
    array: &'a BitArray,
    index: usize,
}

impl<'a> Iterator for Bits<'a> {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        let bit = self.array.get_bit(self.index)?;
        self.index += 1;
        Some(bit)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.capacity() - self.index;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Bits<'a> {}

impl<'a> IntoIterator for &'a BitArray {
    type Item = bool;
    type IntoIter = Bits<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
