//! Per-size cache of the all-ones bit pattern.
//!
//! Building the all-ones pattern costs one `set` per position, so it is done
//! once per distinct size and shared afterwards. Entries are immutable; callers
//! only ever see copies through [`AllOnesCache::clone_of`] or
//! [`BitArray::all`](crate::BitArray::all).
//!
//! ```rust
//! use bit_array::{AllOnesCache, BitArray};
//!
//! let cache = AllOnesCache::new();
//! let board = BitArray::with_cache(81, &cache).unwrap();
//! assert!(cache.contains(81));
//! assert_eq!(board.all().count(), 81);
//! assert_eq!(cache.clone_of(81).unwrap().count(), 81);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use crate::bit_ops;
use crate::{BitArray, BitArrayError};

type Result<T> = core::result::Result<T, BitArrayError>;

/// Largest logical size accepted by the cache and by [`BitArray`].
pub const MAX_LEN: usize = u32::MAX as usize;

#[inline]
pub(crate) fn validate_len(len: usize) -> Result<()> {
    if len <= MAX_LEN {
        Ok(())
    } else {
        Err(BitArrayError::InvalidSize { len, max: MAX_LEN })
    }
}

/// Maps a logical size to the shared word pattern with exactly bits
/// `[0, len)` set. The pattern doubles as the valid-bit mask for that size.
#[derive(Debug, Default)]
pub struct AllOnesCache {
    entries: Mutex<HashMap<usize, Arc<[u64]>>>,
}

impl AllOnesCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`BitArray::new`].
    pub fn global() -> &'static AllOnesCache {
        static GLOBAL: OnceLock<AllOnesCache> = OnceLock::new();
        GLOBAL.get_or_init(AllOnesCache::new)
    }

    // Entries are never mutated after insertion, so a poisoned map is still
    // consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<usize, Arc<[u64]>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the entry for `len`, building it on first use.
    pub fn ensure(&self, len: usize) -> Result<Arc<[u64]>> {
        validate_len(len)?;
        let mut entries = self.lock();
        let ones = entries.entry(len).or_insert_with(|| all_ones_words(len));
        Ok(Arc::clone(ones))
    }

    /// A fresh, independently mutable all-ones array of `len` bits.
    ///
    /// Fails with [`BitArrayError::UnknownSize`] unless [`ensure`](Self::ensure)
    /// already ran for `len`.
    pub fn clone_of(&self, len: usize) -> Result<BitArray> {
        let ones = self
            .lock()
            .get(&len)
            .cloned()
            .ok_or(BitArrayError::UnknownSize(len))?;
        Ok(BitArray::from_parts(len, ones.to_vec(), ones))
    }

    pub fn contains(&self, len: usize) -> bool {
        self.lock().contains_key(&len)
    }

    /// Number of distinct sizes cached so far.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

fn all_ones_words(len: usize) -> Arc<[u64]> {
    let mut words = vec![0u64; bit_ops::word_count(len)];
    for pos in 0..len {
        bit_ops::set_bit(&mut words, pos);
    }
    words.into()
}
