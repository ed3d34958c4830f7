//! # bit_array
//!
//! A fixed-capacity bit array packed into 64-bit words, for compact sets over
//! a small universe of positions (board squares, flags, membership sets).
//!
//! ```rust
//! use bit_array::BitArray;
//!
//! // A 9x9 board
//! let mut occupied = BitArray::new(81).expect("Failed to create bit array");
//! occupied.set(40).unwrap();
//!
//! let free = occupied.all().minus(&occupied).unwrap().clone();
//! assert_eq!(free.count(), 80);
//! assert!(!free.is_set(40).unwrap());
//! ```
//!
//! ## Errors
//!
//! Misuse is reported through [`BitArrayError`] instead of panicking:
//!
//! ```rust
//! use bit_array::{BitArray, BitArrayError};
//!
//! let mut b = BitArray::new(8).unwrap();
//! assert_eq!(
//!     b.set(8).unwrap_err(),
//!     BitArrayError::IndexOutOfRange { index: 8, len: 8 }
//! );
//! assert_eq!(b.shift_left(65).unwrap_err(), BitArrayError::ShiftTooLarge(65));
//! ```
//!

pub mod error;
pub use error::BitArrayError;

mod bit_ops;
pub use bit_ops::WORD_BITS;

pub mod bit_array;
pub mod cache;
pub mod iter;
mod render;

pub use bit_array::BitArray;
pub use cache::{AllOnesCache, MAX_LEN};
pub use iter::Ones;
