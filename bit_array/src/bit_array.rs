//! Fixed-capacity bit array backed by 64-bit words.
//!
//! # Examples
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut squares = BitArray::new(81).expect("failed to create bit array");
//! squares.set(0).unwrap().set(80).unwrap();
//! assert!(squares.is_set(80).unwrap());
//! assert_eq!(squares.count(), 2);
//!
//! // Bulk operations chain and report misuse as errors.
//! let mut empty = squares.all();
//! empty.minus(&squares).unwrap().inverse();
//! assert_eq!(empty, squares);
//! ```
//!
//! ## Out-of-range bits
//!
//! Storage always has room for a few bits past `len()`. `inverse`, the shifts
//! and the boolean operators may leave garbage there, and every read that
//! depends on the size (`count`, equality, rendering, [`ones`](BitArray::ones))
//! masks it away first.
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut b = BitArray::new(80).unwrap();
//! b.inverse();
//! assert_eq!(b.count(), 80);
//! assert_eq!(b, b.all());
//! ```
//!
//! The shifts treat the words as one big integer, so
//! [`shift_right`](BitArray::shift_right) moves that garbage down into
//! `[0, len())`. Mask with `and(&b.all())` first when a logical shift is needed:
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut b = BitArray::new(8).unwrap();
//! b.inverse().shift_right(1).unwrap();
//! assert_eq!(b.count(), 8);
//!
//! let mut b = BitArray::new(8).unwrap();
//! b.inverse();
//! let all = b.all();
//! b.and(&all).unwrap().shift_right(1).unwrap();
//! assert_eq!(b.count(), 7);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::bit_ops::{self, WORD_BITS};
use crate::iter::Ones;
use crate::{AllOnesCache, BitArrayError};

type Result<T> = core::result::Result<T, BitArrayError>;

#[derive(Clone)]
pub struct BitArray {
    len: usize,
    words: Vec<u64>,
    /// All-ones pattern for `len`, shared with the cache that built it.
    all_ones: Arc<[u64]>,
}

impl BitArray {
    /// Creates a zeroed array of `len` bits using the process-wide
    /// [`AllOnesCache`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let b = BitArray::new(8).expect("failed to create bit array");
    /// assert_eq!(b.len(), 8);
    /// assert_eq!(b.count(), 0);
    /// ```
    pub fn new(len: usize) -> Result<Self> {
        Self::with_cache(len, AllOnesCache::global())
    }

    /// Creates a zeroed array of `len` bits whose all-ones pattern comes from
    /// `cache`.
    pub fn with_cache(len: usize, cache: &AllOnesCache) -> Result<Self> {
        let all_ones = cache.ensure(len)?;
        Ok(Self {
            len,
            words: vec![0; all_ones.len()],
            all_ones,
        })
    }

    pub(crate) fn from_parts(len: usize, words: Vec<u64>, all_ones: Arc<[u64]>) -> Self {
        debug_assert_eq!(words.len(), all_ones.len());
        Self {
            len,
            words,
            all_ones,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw word storage, including the bits past `len()`.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Clears every bit.
    pub fn none(&mut self) -> &mut Self {
        self.words.fill(0);
        self
    }

    /// A new array of the same size with every bit set. Does not change `self`.
    pub fn all(&self) -> Self {
        Self {
            len: self.len,
            words: self.all_ones.to_vec(),
            all_ones: Arc::clone(&self.all_ones),
        }
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(BitArrayError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    pub fn set(&mut self, index: usize) -> Result<&mut Self> {
        self.check_index(index)?;
        bit_ops::set_bit(&mut self.words, index);
        Ok(self)
    }

    pub fn clear(&mut self, index: usize) -> Result<&mut Self> {
        self.check_index(index)?;
        bit_ops::clear_bit(&mut self.words, index);
        Ok(self)
    }

    /// Returns the bit at `index` as `0` or `1`.
    pub fn get(&self, index: usize) -> Result<u64> {
        self.check_index(index)?;
        Ok(bit_ops::get_bit(&self.words, index))
    }

    pub fn is_set(&self, index: usize) -> Result<bool> {
        Ok(self.get(index)? == 1)
    }

    #[inline]
    fn check_size(&self, other: &Self) -> Result<()> {
        if self.len == other.len {
            Ok(())
        } else {
            Err(BitArrayError::SizeMismatch {
                expected: self.len,
                found: other.len,
            })
        }
    }

    fn combine(&mut self, other: &Self, op: impl Fn(u64, u64) -> u64) -> Result<&mut Self> {
        self.check_size(other)?;
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a = op(*a, *b);
        }
        Ok(self)
    }

    pub fn and(&mut self, other: &Self) -> Result<&mut Self> {
        self.combine(other, |a, b| a & b)
    }

    pub fn or(&mut self, other: &Self) -> Result<&mut Self> {
        self.combine(other, |a, b| a | b)
    }

    pub fn xor(&mut self, other: &Self) -> Result<&mut Self> {
        self.combine(other, |a, b| a ^ b)
    }

    /// Clears every bit that is set in `other`.
    pub fn minus(&mut self, other: &Self) -> Result<&mut Self> {
        self.combine(other, |a, b| a & !b)
    }

    /// Flips every bit, including the ones past `len()`.
    pub fn inverse(&mut self) -> &mut Self {
        for word in &mut self.words {
            *word = !*word;
        }
        self
    }

    #[inline]
    fn check_shift(times: usize) -> Result<u32> {
        if times <= WORD_BITS {
            Ok(times as u32)
        } else {
            Err(BitArrayError::ShiftTooLarge(times))
        }
    }

    /// Moves every bit `times` positions up, `times <= 64`.
    ///
    /// Bits pushed past the end of storage are lost; vacated low bits are zero.
    ///
    /// ```
    /// use bit_array::BitArray;
    ///
    /// let mut b = BitArray::new(8).unwrap();
    /// b.set(0).unwrap().shift_left(1).unwrap();
    /// assert_eq!(b.ones().collect::<Vec<_>>(), vec![1]);
    /// ```
    pub fn shift_left(&mut self, times: usize) -> Result<&mut Self> {
        bit_ops::shift_left(&mut self.words, Self::check_shift(times)?);
        Ok(self)
    }

    /// Moves every bit `times` positions down, `times <= 64`.
    ///
    /// Bits past `len()` move too, so any garbage left there by `inverse` or
    /// the boolean operators lands in range. `and(&self.all())` clears it.
    pub fn shift_right(&mut self, times: usize) -> Result<&mut Self> {
        bit_ops::shift_right(&mut self.words, Self::check_shift(times)?);
        Ok(self)
    }

    /// Number of set bits in `[0, len())`.
    pub fn count(&self) -> usize {
        bit_ops::masked_count(&self.words, &self.all_ones)
    }

    /// Bitwise equality over `[0, len())`. Arrays of different sizes are never
    /// equal.
    pub fn equal(&self, other: &Self) -> bool {
        self.len == other.len && bit_ops::masked_eq(&self.words, &other.words, &self.all_ones)
    }

    /// Iterates over the positions of set bits in ascending order.
    pub fn ones(&self) -> Ones<'_> {
        Ones::new(&self.words, &self.all_ones)
    }

    /// Words covering `[0, len())` with the out-of-range bits cleared.
    pub(crate) fn masked_words(&self) -> impl Iterator<Item = u64> + '_ {
        self.words
            .iter()
            .zip(self.all_ones.iter())
            .take(bit_ops::logical_words(self.len))
            .map(|(w, m)| w & m)
    }
}

impl PartialEq for BitArray {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for BitArray {}

impl fmt::Debug for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitArray")
            .field("len", &self.len)
            .field("ones", &self.ones().collect::<Vec<_>>())
            .finish()
    }
}
