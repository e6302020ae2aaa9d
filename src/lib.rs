//! A fixed-capacity, byte-backed bit vector.  
//! `no_std` (needs only `alloc`), no `unsafe`.
//!
//! [`BitVector`] is the main struct in this library. Its [features](#features)
//! are listed below.
//!
//! # Examples
//! ```
//! # fn main() -> Result<(), byte_bitvec::Error> {
//! use byte_bitvec::BitVector;
//!
//! let mut bv = BitVector::new(100)?;
//! bv.set(5);
//! assert!(bv.test(5));
//! assert!(!bv.test(4));
//! bv.clear(5);
//! assert!(!bv.test(5));
//!
//! let mut flags = BitVector::from_u32(0xFF00);
//! flags.and_mask(&BitVector::from_u32(0x0FF0));
//! assert_eq!(flags.to_u32_safe(), 0x0F00);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `#![no_std]` compatible, one heap allocation per vector
//! - Size fixed at construction: from a bit count, a `u32`, a `u64` or an
//!   existing byte buffer
//! - Per-bit operations in two tiers:
//!   - unchecked: `set`, `clear`, `flip`, `test`
//!   - checked: `try_set`, `try_clear`, `try_flip`, `try_test`
//! - Bulk operations: `clear_all`, `set_all`, `flip_all` (also `!`)
//! - Mask operations against another bit vector of any length:
//!   - `and_mask`, `or_mask`, `xor_mask`
//!   - `&=`, `|=`, `^=`
//! - Integer conversion, little-endian:
//!   - `to_u32_unchecked`, `to_u64_unchecked` (length not validated)
//!   - `to_u32_safe`, `to_u64_safe` (missing bytes read as zero)
//!
//! # Mask semantics
//!
//! A mask operation never changes the size of the receiver. When the mask is
//! shorter than the receiver, the missing mask bytes count as zero: `and_mask`
//! clears the receiver's excess bytes while `or_mask` and `xor_mask` leave
//! them unchanged. Excess mask bytes are ignored.
//!
//! # Thread safety
//!
//! Mutating methods take `&mut self` and the type has no interior locking. To
//! share a vector between threads, wrap it in a lock of your choice.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod bitvector;
mod error;

pub use bitvector::{BitVector, BitVectorIter, byte_count};
pub use error::{Error, Result};
