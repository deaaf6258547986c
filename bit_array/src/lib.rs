//! # bit_array
//!
//! A `no_std` compatible, byte-packed array of bits.
//!
//! Bits are stored eight per byte, most-significant bit first, in a buffer
//! whose capacity is always a whole number of bytes. Besides the capacity the
//! array tracks an occupancy: how many leading bits are in use. Everything past
//! the occupancy is padding and reads as 0 unless written.
//!
//! ```rust
//! use bit_array::{BitArray, InitMode};
//!
//! let mut bits = BitArray::create(10, InitMode::Ones)?;
//! assert_eq!(bits.capacity(), 16);
//! assert_eq!(bits.to_string(), "[ 1111 1111 1100 0000]");
//!
//! bits.set_bit(3, false);
//! assert_eq!(bits.get_bit(3), Some(false));
//! assert_eq!(bits.get_bit(16), None);
//! # Ok::<(), bit_array::BitArrayError>(())
//! ```
//!
//! ## Resizing
//!
//! Growing and shrinking consume the array and return its replacement; a
//! failed allocation hands the original back untouched.
//!
//! ```rust
//! use bit_array::{BitArray, InitMode};
//!
//! let bits = BitArray::create(20, InitMode::Zeroes)?;
//! let bits = match bits.extend(usize::MAX, InitMode::Ones) {
//!     Ok(grown) => grown,
//!     Err(rejected) => rejected.into_inner(),
//! };
//! assert_eq!(bits.capacity(), 24);
//! # Ok::<(), bit_array::BitArrayError>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): the clock-seeded random source, [`BitArray::create`] and
//!   [`BitArray::extend`], the [`handle`] and [`input`] modules. Without it,
//!   use [`BitArray::create_with`] and [`BitArray::extend_with`].

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::{BitArrayError, Rejected};

mod bit_ops;
pub use bit_ops::BYTE_BITS;

pub mod index;
pub mod mode;
pub mod random;
pub mod render;

pub mod array;
pub use array::{BitArray, Bits};

#[cfg(feature = "std")]
pub mod handle;

#[cfg(feature = "std")]
pub mod input;

pub use mode::InitMode;
pub use random::{ClockSeeded, FixedSeed, RandomSource};
pub use render::GROUPING;
