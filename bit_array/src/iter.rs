//! Iteration over set positions.
//!
//! # Examples
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut flags = BitArray::new(100).unwrap();
//! flags.set(3).unwrap().set(64).unwrap().set(99).unwrap();
//!
//! let set: Vec<usize> = flags.ones().collect();
//! assert_eq!(set, vec![3, 64, 99]);
//! ```

use core::iter::FusedIterator;

use crate::bit_ops::WORD_BITS;

/// Yields the positions of set bits in ascending order, skipping bits
/// outside the mask.
#[derive(Debug, Clone)]
pub struct Ones<'a> {
    words: &'a [u64],
    mask: &'a [u64],
    index: usize,
    current: u64,
}

impl<'a> Ones<'a> {
    pub(crate) fn new(words: &'a [u64], mask: &'a [u64]) -> Self {
        let current = match (words.first(), mask.first()) {
            (Some(w), Some(m)) => w & m,
            _ => 0,
        };
        Self {
            words,
            mask,
            index: 0,
            current,
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            if self.index + 1 >= self.words.len() {
                return None;
            }
            self.index += 1;
            self.current = self.words[self.index] & self.mask[self.index];
        }
        let bit = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        Some(self.index * WORD_BITS + bit)
    }
}

impl FusedIterator for Ones<'_> {}
