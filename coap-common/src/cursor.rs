/// A read cursor over a byte buffer (std- and alloc-less port of [`std::io::Cursor`])
///
/// Every read is bounds-checked against the length of the wrapped buffer;
/// reads that would run past the end return `None` and leave the
/// position where it was.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor<T> {
  t: T,
  cursor: usize,
  len: usize,
}

impl<T: AsRef<[u8]>> Cursor<T> {
  /// Creates a new cursor
  pub fn new(t: T) -> Cursor<T> {
    let len = t.as_ref().len();
    Cursor { t, cursor: 0, len }
  }

  /// Unwraps the cursor, discarding its internal position
  pub fn into_inner(self) -> T {
    self.t
  }

  fn peek_(len: usize, cursor: usize, t: &T, n: usize) -> Option<&[u8]> {
    if n > len - cursor {
      None
    } else {
      Some(&t.as_ref()[cursor..cursor + n])
    }
  }

  /// Take the next byte in the cursor, returning None
  /// if the cursor is exhausted.
  ///
  /// Runs in O(1) time.
  pub fn next(&mut self) -> Option<u8> {
    self.take_exact(1).and_then(|a| match a {
                        | &[a] => Some(a),
                        | _ => None,
                      })
  }

  /// Look at the next byte without advancing the position.
  ///
  /// Runs in O(1) time.
  pub fn peek(&self) -> Option<u8> {
    Self::peek_(self.len, self.cursor, &self.t, 1).and_then(|a| a.first().copied())
  }

  /// Take `n` bytes from the cursor, returning None if
  /// the end of the buffer is encountered.
  ///
  /// Runs in O(1) time.
  pub fn take_exact(&mut self, n: usize) -> Option<&[u8]> {
    Self::peek_(self.len, self.cursor, &self.t, n).map(|a| {
                                                    self.cursor += n;
                                                    a
                                                  })
  }

  /// Without advancing the position, look at the next
  /// `n` bytes, returning None if there are less than `n` bytes
  /// remaining.
  ///
  /// Runs in O(1) time.
  pub fn peek_exact(&self, n: usize) -> Option<&[u8]> {
    Self::peek_(self.len, self.cursor, &self.t, n)
  }

  /// Move `n` bytes forward, returning `false` (and not moving)
  /// if there are less than `n` bytes remaining.
  pub fn skip(&mut self, n: usize) -> bool {
    self.take_exact(n).is_some()
  }

  /// Consume and return every byte left in the buffer.
  ///
  /// Runs in O(1) time.
  pub fn take_until_end(&mut self) -> &[u8] {
    let start = self.cursor;
    self.cursor = self.len;
    &self.t.as_ref()[start..]
  }

  /// Whether the cursor has reached the end
  /// of the buffer.
  ///
  /// Runs in O(1) time.
  pub fn is_exhausted(&self) -> bool {
    self.cursor >= self.len
  }

  /// Number of bytes between the position and the end of the buffer
  pub fn remaining(&self) -> usize {
    self.len - self.cursor
  }

  /// Get the bytes remaining in the buffer without consuming them
  ///
  /// Runs in O(1) time.
  pub fn until_end(&self) -> &[u8] {
    &self.t.as_ref()[self.cursor..]
  }

  /// Get the position the cursor points to within
  /// the buffer
  pub fn position(&self) -> usize {
    self.cursor
  }
}
