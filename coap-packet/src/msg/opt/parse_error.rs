use core::fmt;

/// Errors encounterable while parsing an option from bytes
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum OptParseError {
  /// Reached end of stream while reading extended delta / length bytes
  UnexpectedEndOfStream,

  /// Option Delta was set to 15, which is invalid.
  OptionDeltaReservedValue(u8),

  /// Value Length was set to 15, which is invalid.
  ValueLengthReservedValue(u8),

  /// Adding the delta to the previous option number overflowed `u16`
  NumberOverflow(u32),

  /// Value length ran past the end of the datagram
  #[allow(missing_docs)]
  ValueTooBig { len: usize, remaining: usize },
}

impl OptParseError {
  /// Shorthand for [`OptParseError::UnexpectedEndOfStream`]
  pub fn eof() -> Self {
    Self::UnexpectedEndOfStream
  }
}

impl fmt::Display for OptParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::UnexpectedEndOfStream => f.write_str("option header cut short"),
      | Self::OptionDeltaReservedValue(n) => write!(f, "reserved option delta nibble {}", n),
      | Self::ValueLengthReservedValue(n) => write!(f, "reserved option length nibble {}", n),
      | Self::NumberOverflow(n) => write!(f, "option number {} out of range", n),
      | Self::ValueTooBig { len, remaining } => {
        write!(f, "option value of {} bytes, {} left", len, remaining)
      },
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for OptParseError {}
