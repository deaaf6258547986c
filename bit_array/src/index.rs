use crate::bit_ops::BYTE_BITS;

/// Location of one bit inside a packed byte buffer.
///
/// `offset` counts from the most-significant bit: offset 0 is bit 7 of the
/// byte value, offset 7 is bit 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitIndex {
    pub byte: usize,
    pub offset: u8,
}

impl BitIndex {
    #[inline]
    pub const fn new(index: usize) -> Self {
        BitIndex {
            byte: index / BYTE_BITS,
            offset: (index % BYTE_BITS) as u8,
        }
    }

    /// The flat bit index this location was computed from.
    #[inline]
    pub const fn get(self) -> usize {
        self.byte * BYTE_BITS + self.offset as usize
    }
}

impl From<usize> for BitIndex {
    #[inline]
    fn from(index: usize) -> Self {
        BitIndex::new(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_byte_and_offset() {
        assert_eq!(BitIndex::new(0), BitIndex { byte: 0, offset: 0 });
        assert_eq!(BitIndex::new(7), BitIndex { byte: 0, offset: 7 });
        assert_eq!(BitIndex::new(8), BitIndex { byte: 1, offset: 0 });
        assert_eq!(BitIndex::from(21), BitIndex { byte: 2, offset: 5 });
    }

    #[test]
    fn get_reverses_new() {
        for i in [0, 1, 9, 63, 64, 1023] {
            assert_eq!(BitIndex::new(i).get(), i);
        }
    }
}
