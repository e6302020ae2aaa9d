//! Error type returned by the constructors and the checked per-bit operations.

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by [`BitVector`](crate::BitVector).
///
/// Only constructors and the `try_*` family return errors. The unchecked
/// operations never do, and the `*_safe` conversions cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// A bit vector was requested with zero bits or built from an empty
    /// byte buffer.
    #[error("bit vector must hold at least one bit")]
    ZeroLength,
    /// A checked operation received an index outside the vector.
    #[error("bit index {index} out of bounds for bit vector of {bit_len} bits")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of addressable bits in the vector.
        bit_len: usize,
    },
}
