//! Random-bit sources for [`InitMode::Random`](crate::InitMode::Random).
//!
//! A source is reseeded once at the start of every random fill. The default
//! [`ClockSeeded`] source takes its seed from the wall clock at one-second
//! resolution, so two fills started within the same second draw the same
//! sequence of bits.
//!
//! ```rust
//! use bit_array::{BitArray, FixedSeed, InitMode};
//!
//! let mut source = FixedSeed::new(7);
//! let a = BitArray::create_with(64, InitMode::Random, &mut source)?;
//! let b = BitArray::create_with(64, InitMode::Random, &mut source)?;
//! assert_eq!(a.as_bytes(), b.as_bytes());
//! # Ok::<(), bit_array::BitArrayError>(())
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Restarts the sequence. Called exactly once per fill, before any bit is drawn.
    fn reseed(&mut self);

    fn next_bit(&mut self) -> bool;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn reseed(&mut self) {
        (**self).reseed()
    }

    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}

/// Seeds from a clock reading, in whole seconds, on every reseed.
#[derive(Debug, Clone)]
pub struct ClockSeeded {
    clock: fn() -> u64,
    rng: StdRng,
}

impl ClockSeeded {
    /// Reads the system clock.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        Self::with_clock(unix_seconds)
    }

    /// Reads a caller-supplied clock instead of the system one.
    pub fn with_clock(clock: fn() -> u64) -> Self {
        ClockSeeded {
            clock,
            rng: StdRng::seed_from_u64(clock()),
        }
    }
}

#[cfg(feature = "std")]
impl Default for ClockSeeded {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for ClockSeeded {
    fn reseed(&mut self) {
        let seed = (self.clock)();
        log::trace!("reseeding random bits from clock value {}", seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn next_bit(&mut self) -> bool {
        self.rng.random()
    }
}

/// Seconds since the Unix epoch; a clock set before 1970 reads as 0.
#[cfg(feature = "std")]
pub fn unix_seconds() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// Restarts from the same seed on every reseed.
#[derive(Debug, Clone)]
pub struct FixedSeed {
    seed: u64,
    rng: StdRng,
}

impl FixedSeed {
    pub fn new(seed: u64) -> Self {
        FixedSeed {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for FixedSeed {
    fn reseed(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn next_bit(&mut self) -> bool {
        self.rng.random()
    }
}
