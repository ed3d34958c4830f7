//! Human-readable bit dumps for debugging and visualization.
//!
//! Neither format is meant for storage; both hide bits past `len()`.
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! let mut row = BitArray::new(6).unwrap();
//! row.set(0).unwrap().set(4).unwrap();
//! assert_eq!(row.to_string_broken(3), "\n 1 0 0\n 0 1 0");
//! ```

use std::fmt;

use crate::BitArray;
use crate::bit_ops;

/// One line per word covering the logical range, most significant bit first.
impl fmt::Display for BitArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.masked_words() {
            writeln!(f, "{word:064b}")?;
        }
        Ok(())
    }
}

impl BitArray {
    /// Renders positions `0..len()` in order as `" 0"`/`" 1"`, starting a new
    /// line before every `line_width`-th position. A `line_width` of zero
    /// renders a single line.
    pub fn to_string_broken(&self, line_width: usize) -> String {
        let mut out = String::with_capacity(self.len() * 2 + 1 + self.len() / line_width.max(1));
        for pos in 0..self.len() {
            if line_width != 0 && pos % line_width == 0 {
                out.push('\n');
            }
            out.push_str(if bit_ops::get_bit(self.words(), pos) == 1 {
                " 1"
            } else {
                " 0"
            });
        }
        out
    }
}
