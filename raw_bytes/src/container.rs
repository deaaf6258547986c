use crate::{ContainerError, storage};
use bytemuck::Pod;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Fixed-length, heap-allocated run of `T` owned by exactly one value.
///
/// `Container<T>` never grows in place. Every size change produces a new
/// container ([`resized`](Container::resized)) and leaves the source alone, so
/// a failed allocation can never corrupt data the caller still holds. `T` must
/// implement [`bytemuck::Pod`] so that fresh slots can be zero-initialized.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```
/// use raw_bytes::Container;
///
/// let mut c = Container::<u8>::zeroed(3).unwrap();
/// assert_eq!(c.len(), 3);
///
/// *c.get_mut(1).unwrap() = 0x7F;
/// assert_eq!(c.get(1).unwrap(), &0x7F);
/// assert!(c.get(3).is_err());
/// ```
///
/// ## Independent Copies
///
/// ```
/// use raw_bytes::Container;
///
/// let original = Container::try_from_slice(&[1u8, 2, 3]).unwrap();
/// let mut copy = original.try_clone().unwrap();
/// copy.as_mut_slice()[0] = 9;
///
/// assert_eq!(original.as_slice(), &[1, 2, 3]);
/// assert_eq!(copy.as_slice(), &[9, 2, 3]);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Container<T: Pod> {
    data: Vec<T>,
}

impl<T: Pod> Container<T> {
    /// Creates an empty container.
    pub fn new() -> Self {
        Container { data: Vec::new() }
    }

    /// Allocates `len` zero-initialized elements.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::AllocationFailed` if the memory can't be reserved.
    pub fn zeroed(len: usize) -> Result<Self, ContainerError> {
        Ok(Container {
            data: storage::try_zeroed(len)?,
        })
    }

    /// Allocates a container holding a copy of `values`.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::AllocationFailed` if the memory can't be reserved.
    pub fn try_from_slice(values: &[T]) -> Result<Self, ContainerError> {
        Ok(Container {
            data: storage::try_copy(values)?,
        })
    }

    /// Allocates an independent, byte-for-byte copy of this container.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::AllocationFailed` if the memory can't be
    /// reserved; `self` is unaffected.
    pub fn try_clone(&self) -> Result<Self, ContainerError> {
        Self::try_from_slice(&self.data)
    }

    /// Allocates a new container of `len` elements.
    ///
    /// The longest prefix of `self` that fits is copied over and any slots past
    /// the old length are zeroed. `self` is left untouched either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use raw_bytes::Container;
    ///
    /// let c = Container::try_from_slice(&[1u8, 2, 3]).unwrap();
    /// assert_eq!(c.resized(5).unwrap().as_slice(), &[1, 2, 3, 0, 0]);
    /// assert_eq!(c.resized(1).unwrap().as_slice(), &[1]);
    /// ```
    pub fn resized(&self, len: usize) -> Result<Self, ContainerError> {
        Ok(Container {
            data: storage::try_resized(&self.data, len)?,
        })
    }

    /// Returns the number of elements in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the container contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, ContainerError> {
        self.data.get(index).ok_or(ContainerError::OutOfBounds(index))
    }

    /// Returns a mutable reference to the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns `ContainerError::OutOfBounds` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        self.data
            .get_mut(index)
            .ok_or(ContainerError::OutOfBounds(index))
    }

    /// Returns an immutable slice view of all elements.
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Returns a mutable slice view of all elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_mut_slice()
    }

    /// Returns an iterator over elements.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Pod> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck_derive::{Pod, Zeroable};

    #[repr(C)]
    #[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
    struct Packet {
        id: u32,
        value: f32,
    }

    #[test]
    fn zeroed_basic_operations() -> Result<(), ContainerError> {
        let mut c = Container::<Packet>::zeroed(2)?;
        assert_eq!(c.len(), 2);
        assert!(!c.is_empty());
        assert_eq!(c.get(0)?, &Packet { id: 0, value: 0.0 });

        c.get_mut(1)?.id = 7;
        assert_eq!(c.get(1)?.id, 7);
        assert!(matches!(c.get(2), Err(ContainerError::OutOfBounds(2))));
        assert!(matches!(c.get_mut(5), Err(ContainerError::OutOfBounds(5))));

        Ok(())
    }

    #[test]
    fn empty_container() {
        let c = Container::<u8>::default();
        assert!(c.is_empty());
        assert_eq!(c, Container::new());
        assert!(c.get(0).is_err());
    }

    #[test]
    fn clone_is_independent() -> Result<(), ContainerError> {
        let source = Container::try_from_slice(&[0xF0u8, 0x0F])?;
        let mut copy = source.try_clone()?;
        assert_eq!(copy, source);

        copy.as_mut_slice()[1] = 0;
        assert_eq!(source.as_slice(), &[0xF0, 0x0F]);
        assert_eq!(copy.as_slice(), &[0xF0, 0x00]);

        Ok(())
    }

    #[test]
    fn resized_leaves_source_untouched() -> Result<(), ContainerError> {
        let source = Container::try_from_slice(&[1u8, 2, 3, 4])?;

        let grown = source.resized(6)?;
        assert_eq!(grown.as_slice(), &[1, 2, 3, 4, 0, 0]);

        let shrunk = source.resized(2)?;
        assert_eq!(shrunk.as_slice(), &[1, 2]);

        assert_eq!(source.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(source.iter().copied().sum::<u8>(), 10);

        Ok(())
    }

    #[test]
    fn failed_resize_reports_and_keeps_source() -> Result<(), ContainerError> {
        let source = Container::try_from_slice(&[5u8; 3])?;
        assert!(matches!(
            source.resized(usize::MAX),
            Err(ContainerError::AllocationFailed { .. })
        ));
        assert_eq!(source.as_slice(), &[5, 5, 5]);

        Ok(())
    }
}
