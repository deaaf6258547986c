use raw_bytes::ContainerError;
#[cfg(feature = "std")]
use thiserror::Error;

use crate::BitArray;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitArrayError {
    #[cfg_attr(feature = "std", error("allocation of {bytes} bytes failed"))]
    AllocationFailed { bytes: usize },

    #[cfg_attr(
        feature = "std",
        error("capacity for {requested} requested bits overflows usize")
    )]
    CapacityOverflow { requested: usize },

    #[cfg_attr(feature = "std", error("storage error: {0}"))]
    Container(ContainerError),

    #[cfg(feature = "std")]
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "std")]
    #[error("input ended before the bit array was complete")]
    UnexpectedEof,
}

impl From<ContainerError> for BitArrayError {
    fn from(err: ContainerError) -> Self {
        match err {
            ContainerError::AllocationFailed { elements } => {
                BitArrayError::AllocationFailed { bytes: elements }
            }
            other => BitArrayError::Container(other),
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitArrayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitArrayError::AllocationFailed { bytes } => {
                write!(f, "allocation of {} bytes failed", bytes)
            }
            BitArrayError::CapacityOverflow { requested } => {
                write!(f, "capacity for {} requested bits overflows usize", requested)
            }
            BitArrayError::Container(e) => write!(f, "storage error: {}", e),
        }
    }
}

/// A resize that could not be carried out.
///
/// Holds the instance that was passed in, unmodified, so the caller never
/// loses data to a failed extend or contract.
#[derive(Debug)]
pub struct Rejected {
    array: BitArray,
    cause: BitArrayError,
}

impl Rejected {
    pub(crate) fn new(array: BitArray, cause: BitArrayError) -> Self {
        Rejected { array, cause }
    }

    /// Takes back the untouched original.
    pub fn into_inner(self) -> BitArray {
        self.array
    }

    pub fn error(&self) -> &BitArrayError {
        &self.cause
    }

    pub fn into_parts(self) -> (BitArray, BitArrayError) {
        (self.array, self.cause)
    }
}

impl core::fmt::Display for Rejected {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "resize of a {}-bit array rejected: {}",
            self.array.capacity(),
            self.cause
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Rejected {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
