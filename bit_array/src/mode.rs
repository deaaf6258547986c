/// Pattern written into bits that an allocation or an extension introduces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum InitMode {
    /// Leave the freshly zeroed bits alone.
    #[default]
    Zeroes,
    /// Set every introduced bit.
    Ones,
    /// Draw every introduced bit from a [`RandomSource`](crate::RandomSource).
    Random,
}
