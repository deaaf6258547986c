//! # raw_bytes
//!
//! Exclusively-owned, fallibly-allocated storage for plain-old-data elements.
//!
//! Every allocation goes through [`Vec::try_reserve_exact`], so running out of
//! memory surfaces as [`ContainerError::AllocationFailed`] instead of aborting
//! the process.
//!
//! ```rust
//! use raw_bytes::Container;
//!
//! let mut bytes = Container::<u8>::zeroed(4)?;
//! bytes.as_mut_slice()[0] = 0xFF;
//!
//! let grown = bytes.resized(6)?;
//! assert_eq!(grown.as_slice(), &[0xFF, 0, 0, 0, 0, 0]);
//! # Ok::<(), raw_bytes::ContainerError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod container;
pub mod error;
#[doc(hidden)]
pub mod storage;

pub use container::Container;
pub use error::ContainerError;
