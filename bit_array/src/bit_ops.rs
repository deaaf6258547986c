//! Byte-level bit arithmetic, MSB first.
//!
//! Nothing in here knows about allocation; the engine composes these with
//! [`BitIndex`](crate::index::BitIndex) to address its buffer.

/// Bits per storage byte.
pub const BYTE_BITS: usize = 8;

/// Every bit of a byte set.
pub const FULL_BYTE: u8 = u8::MAX;

/// Selects the bit `offset` places below the most-significant one.
#[inline(always)]
pub const fn mask(offset: u8) -> u8 {
    debug_assert!((offset as usize) < BYTE_BITS);
    0x80 >> offset
}

#[inline(always)]
pub const fn read(byte: u8, offset: u8) -> bool {
    byte & mask(offset) != 0
}

/// Clears the addressed bit, then sets it again if `value` is true.
#[inline(always)]
pub const fn write(byte: u8, offset: u8, value: bool) -> u8 {
    let cleared = byte & !mask(offset);
    if value { cleared | mask(offset) } else { cleared }
}

/// Whole bytes needed to hold `bits` bits.
#[inline]
pub const fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(BYTE_BITS)
}

/// `bits` rounded up to the next byte boundary, or `None` on overflow.
#[inline]
pub const fn round_up8(bits: usize) -> Option<usize> {
    bytes_for(bits).checked_mul(BYTE_BITS)
}
