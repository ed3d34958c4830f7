use thiserror::Error;

/// Errors raised by [`BitArray`](crate::BitArray) and
/// [`AllOnesCache`](crate::AllOnesCache) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitArrayError {
    #[error("Bit array size {len} exceeds the maximum of {max} bits")]
    InvalidSize { len: usize, max: usize },

    #[error("Index {index} is out of range for bit array of size {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Shift distance {0} exceeds the word width of {width} bits", width = crate::WORD_BITS)]
    ShiftTooLarge(usize),

    #[error("Size mismatch: expected {expected} bits, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("No all-ones entry cached for size {0}")]
    UnknownSize(usize),
}
