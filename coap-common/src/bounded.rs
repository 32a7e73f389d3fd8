use core::fmt;

use std_alloc::vec::Vec;

/// A write would have grown a [`BoundedBuf`] past its capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Overflow {
  /// Capacity of the buffer
  pub capacity: usize,
  /// Size the buffer would have had after the rejected write
  pub size: usize,
}

impl fmt::Display for Overflow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f,
           "writing would grow buffer to {} bytes, capacity is {}",
           self.size, self.capacity)
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Overflow {}

/// A growable byte buffer that refuses to grow past a fixed capacity.
///
/// Every write checks the capacity **before** touching the buffer, so a
/// rejected write leaves the contents exactly as they were.
///
/// ```
/// use coap_common::{BoundedBuf, Overflow};
///
/// let mut buf = BoundedBuf::new(3);
/// buf.push(1).unwrap();
/// buf.extend_from_slice(&[2, 3]).unwrap();
///
/// assert_eq!(buf.push(4), Err(Overflow { capacity: 3, size: 4 }));
/// assert_eq!(buf.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoundedBuf {
  bytes: Vec<u8>,
  capacity: usize,
}

impl BoundedBuf {
  /// Create an empty buffer that may hold at most `capacity` bytes.
  ///
  /// Nothing is allocated until the first write.
  pub fn new(capacity: usize) -> Self {
    Self { bytes: Vec::new(),
           capacity }
  }

  /// Create an empty buffer that may hold at most `capacity` bytes,
  /// reserving space for `hint` bytes up front.
  ///
  /// The reservation is clamped to `capacity`.
  pub fn with_size_hint(capacity: usize, hint: usize) -> Self {
    Self { bytes: Vec::with_capacity(hint.min(capacity)),
           capacity }
  }

  fn check(&self, n: usize) -> Result<(), Overflow> {
    match self.bytes.len().checked_add(n) {
      | Some(size) if size <= self.capacity => Ok(()),
      | size => Err(Overflow { capacity: self.capacity,
                               size: size.unwrap_or(usize::MAX) }),
    }
  }

  /// Append a single byte
  pub fn push(&mut self, b: u8) -> Result<(), Overflow> {
    self.check(1)?;
    self.bytes.push(b);
    Ok(())
  }

  /// Append a slice of bytes; either all of `bs` is written or none of it is.
  pub fn extend_from_slice(&mut self, bs: &[u8]) -> Result<(), Overflow> {
    self.check(bs.len())?;
    self.bytes.extend_from_slice(bs);
    Ok(())
  }

  /// Number of bytes written so far
  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  /// Whether nothing has been written yet
  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }

  /// Maximum number of bytes this buffer will accept
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Number of bytes that may still be written
  pub fn remaining(&self) -> usize {
    self.capacity.saturating_sub(self.bytes.len())
  }

  /// The bytes written so far
  pub fn as_slice(&self) -> &[u8] {
    &self.bytes
  }

  /// Unwrap the written bytes
  pub fn into_inner(self) -> Vec<u8> {
    self.bytes
  }
}

impl AsRef<[u8]> for BoundedBuf {
  fn as_ref(&self) -> &[u8] {
    self.as_slice()
  }
}
