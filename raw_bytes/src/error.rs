#[cfg(feature = "std")]
use thiserror::Error;

/// Container errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    /// The allocator refused to hand out room for `elements` items
    #[cfg_attr(feature = "std", error("allocation of {elements} elements failed"))]
    AllocationFailed { elements: usize },

    /// Out-of-bounds access
    #[cfg_attr(feature = "std", error("Index {0} out of bounds"))]
    OutOfBounds(usize),
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ContainerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContainerError::AllocationFailed { elements } => {
                write!(f, "allocation of {} elements failed", elements)
            }
            ContainerError::OutOfBounds(i) => write!(f, "Index {} out of bounds", i),
        }
    }
}
