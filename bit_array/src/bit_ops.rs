//! Word-level primitives over `[u64]` storage.
//!
//! Positions are little-endian across the slice: bit `p` lives in word
//! `p / 64` at offset `p % 64`.

pub const WORD_BITS: usize = 64;

/// Words backing `len` logical bits: the words covering `[0, len)` plus one
/// guard word that holds left-shift carries out of the logical range.
#[inline]
pub const fn word_count(len: usize) -> usize {
    logical_words(len) + 1
}

/// Words holding at least one in-range bit.
#[inline]
pub const fn logical_words(len: usize) -> usize {
    len.div_ceil(WORD_BITS)
}

/// Splits a bit position into its word index and offset within that word.
#[inline(always)]
pub const fn index_pos(pos: usize) -> (usize, u32) {
    (pos / WORD_BITS, (pos % WORD_BITS) as u32)
}

#[inline]
pub fn set_bit(words: &mut [u64], pos: usize) {
    let (word, bit) = index_pos(pos);
    words[word] |= 1 << bit;
}

#[inline]
pub fn clear_bit(words: &mut [u64], pos: usize) {
    let (word, bit) = index_pos(pos);
    words[word] &= !(1 << bit);
}

#[inline]
pub fn get_bit(words: &[u64], pos: usize) -> u64 {
    let (word, bit) = index_pos(pos);
    (words[word] >> bit) & 1
}

/// Shifts the whole slice towards higher positions by `n` bits, `n <= 64`.
///
/// Walks from the least significant word up, so the top `n` bits of word `i`
/// are taken before word `i` is overwritten and land at the bottom of word
/// `i + 1`. Carries out of the last word are dropped.
pub fn shift_left(words: &mut [u64], n: u32) {
    debug_assert!(n as usize <= WORD_BITS);
    if n == 0 {
        return;
    }
    let mut carry = 0u64;
    for word in words.iter_mut() {
        let out = *word >> (WORD_BITS as u32 - n);
        *word = word.checked_shl(n).unwrap_or(0) | carry;
        carry = out;
    }
}

/// Shifts the whole slice towards lower positions by `n` bits, `n <= 64`.
///
/// Mirror image of [`shift_left`]: walks from the most significant word down,
/// moving the bottom `n` bits of word `i` into the top of word `i - 1`.
pub fn shift_right(words: &mut [u64], n: u32) {
    debug_assert!(n as usize <= WORD_BITS);
    if n == 0 {
        return;
    }
    let mut carry = 0u64;
    for word in words.iter_mut().rev() {
        let out = *word << (WORD_BITS as u32 - n);
        *word = word.checked_shr(n).unwrap_or(0) | carry;
        carry = out;
    }
}

/// Population count of `words & mask`.
pub fn masked_count(words: &[u64], mask: &[u64]) -> usize {
    words
        .iter()
        .zip(mask)
        .map(|(w, m)| (w & m).count_ones() as usize)
        .sum()
}

/// Compares two equally long slices bit for bit, ignoring bits cleared in `mask`.
pub fn masked_eq(a: &[u64], b: &[u64], mask: &[u64]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .zip(mask)
            .all(|((x, y), m)| x & m == y & m)
}
