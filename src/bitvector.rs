use crate::error::{Error, Result};
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};
use core::iter::FusedIterator;
use core::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not};

/// Computes the number of bytes needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use byte_bitvec::byte_count;
///
/// assert_eq!(byte_count(9), 2);
/// assert_eq!(byte_count(16), 2);
/// assert_eq!(byte_count(17), 3);
/// ```
pub const fn byte_count(bit_count: usize) -> usize {
    bit_count.div_ceil(8)
}

/// A fixed-capacity bit vector backed by a byte buffer.
///
/// Bit `i` lives in byte `i / 8` at bit offset `i % 8`, so bit 0 is the least
/// significant bit of the first byte. The byte length is chosen at
/// construction and never changes afterwards; every bit of every byte is
/// addressable, including the up to 7 padding bits [`new`] adds when the
/// requested bit count is not a multiple of 8.
///
/// # Unchecked and checked access
///
/// [`set`], [`clear`], [`flip`], [`test`], [`to_u32_unchecked`] and
/// [`to_u64_unchecked`] trust the caller: they do no validation of their own
/// and are meant for hot loops where the index or length is already known to
/// be good. A violated precondition never touches memory outside the buffer,
/// it panics on the slice access instead.
///
/// The `try_*` methods validate the index and return
/// [`Error::IndexOutOfBounds`], while [`to_u32_safe`] and [`to_u64_safe`]
/// cannot fail at all.
///
/// [`new`]: BitVector::new
/// [`set`]: BitVector::set
/// [`clear`]: BitVector::clear
/// [`flip`]: BitVector::flip
/// [`test`]: BitVector::test
/// [`to_u32_unchecked`]: BitVector::to_u32_unchecked
/// [`to_u64_unchecked`]: BitVector::to_u64_unchecked
/// [`to_u32_safe`]: BitVector::to_u32_safe
/// [`to_u64_safe`]: BitVector::to_u64_safe
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct BitVector(pub(crate) Vec<u8>);

impl BitVector {
    /// Creates a bit vector able to hold `bit_count` bits, all unset.
    ///
    /// Allocates [`byte_count(bit_count)`](byte_count) bytes, so the
    /// resulting [`bit_len`](BitVector::bit_len) is rounded up to the next
    /// multiple of 8.
    ///
    /// # Errors
    /// Returns [`Error::ZeroLength`] if `bit_count == 0`.
    ///
    /// # Examples
    /// ```
    /// # fn main() -> Result<(), byte_bitvec::Error> {
    /// use byte_bitvec::BitVector;
    ///
    /// let bv = BitVector::new(100)?;
    /// assert_eq!(bv.size(), 13);
    /// assert_eq!(bv.bit_len(), 104);
    /// assert!(!bv.test(99));
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(bit_count: usize) -> Result<Self> {
        if bit_count == 0 {
            return Err(Error::ZeroLength);
        }
        Ok(Self(vec![0u8; byte_count(bit_count)]))
    }

    /// Creates a bit vector able to hold `bit_count` bits, all set.
    ///
    /// Padding bits beyond `bit_count` are set as well.
    ///
    /// # Errors
    /// Returns [`Error::ZeroLength`] if `bit_count == 0`.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let bv = BitVector::with_all_set(10).unwrap();
    /// assert_eq!(bv.as_bytes(), &[0xFF, 0xFF]);
    /// ```
    pub fn with_all_set(bit_count: usize) -> Result<Self> {
        let mut bv = Self::new(bit_count)?;
        bv.set_all();
        Ok(bv)
    }

    /// Creates a 4-byte bit vector holding the little-endian bytes of `seed`.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let bv = BitVector::from_u32(0xFF00);
    /// assert_eq!(bv.as_bytes(), &[0x00, 0xFF, 0x00, 0x00]);
    /// assert!(bv.test(8));
    /// assert!(!bv.test(7));
    /// ```
    pub fn from_u32(seed: u32) -> Self {
        Self(seed.to_le_bytes().to_vec())
    }

    /// Creates an 8-byte bit vector holding the little-endian bytes of `seed`.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let bv = BitVector::from_u64(1 << 63);
    /// assert_eq!(bv.size(), 8);
    /// assert!(bv.test(63));
    /// ```
    pub fn from_u64(seed: u64) -> Self {
        Self(seed.to_le_bytes().to_vec())
    }

    /// Adopts `bytes` as the backing buffer without copying.
    ///
    /// This is the inverse of [`into_bytes`](BitVector::into_bytes).
    ///
    /// # Errors
    /// Returns [`Error::ZeroLength`] if `bytes` is empty.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::{BitVector, Error};
    ///
    /// let bv = BitVector::from_bytes(vec![0b0000_0101]).unwrap();
    /// assert!(bv.test(0));
    /// assert!(bv.test(2));
    /// assert_eq!(BitVector::from_bytes(vec![]), Err(Error::ZeroLength));
    /// ```
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::ZeroLength);
        }
        Ok(Self(bytes))
    }

    /// Returns the number of bytes in the backing buffer.
    #[inline]
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns the number of addressable bits, always `8 * size()`.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.0.len() * 8
    }

    /// Returns the backing buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consumes the bit vector and returns its backing buffer.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    /// The index is not validated. Panics if `idx >= bit_len()`; use
    /// [`try_set`](BitVector::try_set) for a checked variant.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(8).unwrap();
    /// bv.set(3);
    /// assert!(bv.test(3));
    /// ```
    #[inline]
    pub fn set(&mut self, idx: usize) {
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.0[byte_idx] |= 1 << bit_idx;
    }

    /// Unsets the bit at the given index.
    ///
    /// # Panics
    /// The index is not validated. Panics if `idx >= bit_len()`; use
    /// [`try_clear`](BitVector::try_clear) for a checked variant.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::with_all_set(8).unwrap();
    /// bv.clear(3);
    /// assert!(!bv.test(3));
    /// ```
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.0[byte_idx] &= !(1 << bit_idx);
    }

    /// Toggles the bit at the given index.
    ///
    /// # Panics
    /// The index is not validated. Panics if `idx >= bit_len()`; use
    /// [`try_flip`](BitVector::try_flip) for a checked variant.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::new(8).unwrap();
    /// bv.flip(4);
    /// assert!(bv.test(4));
    /// bv.flip(4);
    /// assert!(!bv.test(4));
    /// ```
    #[inline]
    pub fn flip(&mut self, idx: usize) {
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.0[byte_idx] ^= 1 << bit_idx;
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// The index is not validated. Panics if `idx >= bit_len()`; use
    /// [`try_test`](BitVector::try_test) for a checked variant.
    #[inline]
    pub fn test(&self, idx: usize) -> bool {
        let (byte_idx, bit_idx) = Self::idxs(idx);
        self.0[byte_idx] & 1 << bit_idx != 0
    }

    /// Checked [`set`](BitVector::set).
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_len()`, leaving the
    /// vector untouched.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::{BitVector, Error};
    ///
    /// let mut bv = BitVector::new(8).unwrap();
    /// assert_eq!(bv.try_set(7), Ok(()));
    /// assert_eq!(
    ///     bv.try_set(8),
    ///     Err(Error::IndexOutOfBounds { index: 8, bit_len: 8 })
    /// );
    /// ```
    pub fn try_set(&mut self, idx: usize) -> Result<()> {
        self.check_idx(idx)?;
        self.set(idx);
        Ok(())
    }

    /// Checked [`clear`](BitVector::clear).
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_len()`, leaving the
    /// vector untouched.
    pub fn try_clear(&mut self, idx: usize) -> Result<()> {
        self.check_idx(idx)?;
        self.clear(idx);
        Ok(())
    }

    /// Checked [`flip`](BitVector::flip).
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_len()`, leaving the
    /// vector untouched.
    pub fn try_flip(&mut self, idx: usize) -> Result<()> {
        self.check_idx(idx)?;
        self.flip(idx);
        Ok(())
    }

    /// Checked [`test`](BitVector::test).
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfBounds`] if `idx >= bit_len()`.
    pub fn try_test(&self, idx: usize) -> Result<bool> {
        self.check_idx(idx)?;
        Ok(self.test(idx))
    }

    #[inline]
    fn check_idx(&self, idx: usize) -> Result<()> {
        if idx < self.bit_len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds {
                index: idx,
                bit_len: self.bit_len(),
            })
        }
    }

    #[inline]
    fn idxs(idx: usize) -> (usize, usize) {
        (idx / 8, idx % 8)
    }

    /// Unsets every bit.
    #[inline]
    pub fn clear_all(&mut self) {
        self.0.fill(0);
    }

    /// Sets every bit, padding bits included.
    #[inline]
    pub fn set_all(&mut self) {
        self.0.fill(!0);
    }

    /// Inverts every bit in place.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::from_u32(0x0000_FFFF);
    /// bv.flip_all();
    /// assert_eq!(bv.to_u32_safe(), 0xFFFF_0000);
    /// ```
    #[inline]
    pub fn flip_all(&mut self) {
        for byte in &mut self.0 {
            *byte = !*byte;
        }
    }

    /// Performs an in-place bitwise AND with `mask`.
    ///
    /// `self` keeps its size. Bytes of `self` beyond the end of `mask` are
    /// combined with zero and therefore cleared; extra bytes of `mask` are
    /// ignored.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::from_u32(0xFFFF_FFFF);
    /// let mask = BitVector::from_bytes(vec![0x0F, 0xF0]).unwrap();
    /// bv.and_mask(&mask);
    /// assert_eq!(bv.as_bytes(), &[0x0F, 0xF0, 0x00, 0x00]);
    /// ```
    ///
    /// A vector can't be masked with itself:
    /// ```compile_fail
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::from_u32(1);
    /// bv.and_mask(&bv);
    /// ```
    pub fn and_mask(&mut self, mask: &Self) {
        self.combine(mask, |byte, mask_byte| byte & mask_byte);
    }

    /// Performs an in-place bitwise OR with `mask`.
    ///
    /// `self` keeps its size. Bytes of `self` beyond the end of `mask` are
    /// left unchanged; extra bytes of `mask` are ignored.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::from_u32(0x1200_0000);
    /// bv.or_mask(&BitVector::from_bytes(vec![0x34]).unwrap());
    /// assert_eq!(bv.to_u32_safe(), 0x1200_0034);
    /// ```
    pub fn or_mask(&mut self, mask: &Self) {
        self.combine(mask, |byte, mask_byte| byte | mask_byte);
    }

    /// Performs an in-place bitwise XOR with `mask`.
    ///
    /// `self` keeps its size. Bytes of `self` beyond the end of `mask` are
    /// left unchanged; extra bytes of `mask` are ignored.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let mut bv = BitVector::from_u32(0b1100);
    /// let mask = BitVector::from_u32(0b1010);
    /// bv.xor_mask(&mask);
    /// assert_eq!(bv.to_u32_safe(), 0b0110);
    /// bv.xor_mask(&mask);
    /// assert_eq!(bv.to_u32_safe(), 0b1100);
    /// ```
    pub fn xor_mask(&mut self, mask: &Self) {
        self.combine(mask, |byte, mask_byte| byte ^ mask_byte);
    }

    #[inline]
    fn combine(&mut self, mask: &Self, op: impl Fn(u8, u8) -> u8) {
        for (idx, byte) in self.0.iter_mut().enumerate() {
            // missing mask bytes act as zero
            let mask_byte = mask.0.get(idx).copied().unwrap_or(0);
            *byte = op(*byte, mask_byte);
        }
    }

    /// Reads the first 4 bytes as a little-endian `u32`.
    ///
    /// Bytes beyond the fourth are ignored.
    ///
    /// # Panics
    /// The length is not validated. Panics if `size() < 4`; use
    /// [`to_u32_safe`](BitVector::to_u32_safe) for shorter vectors.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// assert_eq!(BitVector::from_u32(0xDEAD_BEEF).to_u32_unchecked(), 0xDEAD_BEEF);
    /// ```
    #[inline]
    pub fn to_u32_unchecked(&self) -> u32 {
        u32::from_le_bytes(self.le_bytes_exact())
    }

    /// Reads up to the first 4 bytes as a little-endian `u32`.
    ///
    /// Missing high bytes of a shorter vector read as zero.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let bv = BitVector::from_bytes(vec![0x34, 0x12]).unwrap();
    /// assert_eq!(bv.to_u32_safe(), 0x1234);
    /// ```
    #[inline]
    pub fn to_u32_safe(&self) -> u32 {
        u32::from_le_bytes(self.le_bytes_padded())
    }

    /// Reads the first 8 bytes as a little-endian `u64`.
    ///
    /// Bytes beyond the eighth are ignored.
    ///
    /// # Panics
    /// The length is not validated. Panics if `size() < 8`; use
    /// [`to_u64_safe`](BitVector::to_u64_safe) for shorter vectors.
    #[inline]
    pub fn to_u64_unchecked(&self) -> u64 {
        u64::from_le_bytes(self.le_bytes_exact())
    }

    /// Reads up to the first 8 bytes as a little-endian `u64`.
    ///
    /// Missing high bytes of a shorter vector read as zero.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// assert_eq!(BitVector::from_u32(u32::MAX).to_u64_safe(), 0xFFFF_FFFF);
    /// ```
    #[inline]
    pub fn to_u64_safe(&self) -> u64 {
        u64::from_le_bytes(self.le_bytes_padded())
    }

    #[inline]
    fn le_bytes_exact<const N: usize>(&self) -> [u8; N] {
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.0[..N]);
        buf
    }

    #[inline]
    fn le_bytes_padded<const N: usize>(&self) -> [u8; N] {
        let mut buf = [0u8; N];
        let available = self.0.len().min(N);
        buf[..available].copy_from_slice(&self.0[..available]);
        buf
    }

    /// Returns an iterator over all addressable bits as `bool`, from least to
    /// most significant.
    ///
    /// The iterator yields exactly `bit_len()` items in order.
    ///
    /// # Examples
    /// ```
    /// use byte_bitvec::BitVector;
    ///
    /// let bv = BitVector::from_bytes(vec![0b0000_0101]).unwrap();
    /// let ones: Vec<usize> = bv
    ///     .iter()
    ///     .enumerate()
    ///     .filter_map(|(idx, bit)| bit.then_some(idx))
    ///     .collect();
    /// assert_eq!(ones, [0, 2]);
    /// ```
    #[inline]
    pub fn iter(&self) -> BitVectorIter<'_> {
        BitVectorIter {
            bytes: &self.0,
            byte_idx: 0,
            bit_idx: 0,
        }
    }
}

impl From<u32> for BitVector {
    fn from(seed: u32) -> Self {
        Self::from_u32(seed)
    }
}

impl From<u64> for BitVector {
    fn from(seed: u64) -> Self {
        Self::from_u64(seed)
    }
}

impl TryFrom<Vec<u8>> for BitVector {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for BitVector {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes.to_vec())
    }
}

impl<'bitvec> IntoIterator for &'bitvec BitVector {
    type Item = bool;
    type IntoIter = BitVectorIter<'bitvec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "LSB -> ")?;
        for (i, bit) in self.iter().enumerate() {
            if i % 8 == 0 {
                write!(f, "{i}: ")?;
            }
            write!(f, "{}", if bit { '1' } else { '0' })?;
            if i % 8 == 7 && i < self.bit_len() - 1 {
                write!(f, " ")?;
            }
        }
        write!(f, " <- MSB")?;
        Ok(())
    }
}

impl BitAndAssign<&BitVector> for BitVector {
    fn bitand_assign(&mut self, rhs: &BitVector) {
        self.and_mask(rhs)
    }
}

impl BitOrAssign<&BitVector> for BitVector {
    fn bitor_assign(&mut self, rhs: &BitVector) {
        self.or_mask(rhs)
    }
}

impl BitXorAssign<&BitVector> for BitVector {
    fn bitxor_assign(&mut self, rhs: &BitVector) {
        self.xor_mask(rhs)
    }
}

impl Not for BitVector {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.flip_all();
        self
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    fn not(self) -> Self::Output {
        !self.clone()
    }
}

/// Iterator over all bits of a [`BitVector`] as `bool` values.
///
/// Yields `true` for set bits and `false` for unset bits, starting from index 0.
///
/// Returned by [`BitVector::iter()`].
#[derive(Clone, Copy)]
pub struct BitVectorIter<'bitvec> {
    bytes: &'bitvec [u8],
    byte_idx: usize,
    bit_idx: usize,
}

impl Iterator for BitVectorIter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = *self.bytes.get(self.byte_idx)?;
        let bit = byte & 1 << self.bit_idx;
        self.bit_idx += 1;
        if self.bit_idx == 8 {
            self.bit_idx = 0;
            self.byte_idx += 1;
        }
        Some(bit != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.bytes.len() * 8).saturating_sub(self.byte_idx * 8 + self.bit_idx);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitVectorIter<'_> {}

impl FusedIterator for BitVectorIter<'_> {}
