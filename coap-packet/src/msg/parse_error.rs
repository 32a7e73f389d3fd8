use core::fmt;

use super::opt::parse_error::OptParseError;

/// Errors encounterable while parsing a message from bytes
///
/// Parsing stops at the first of these that is encountered;
/// no part of a message that failed to parse is ever returned.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum MessageParseError {
  /// The datagram is shorter than the 4 byte fixed header
  PacketTooSmall(usize),

  /// The datagram is longer than 65535 bytes
  PacketTooBig(usize),

  /// Version field was something other than 1
  BadVersion(u8),

  /// Token length was > 8, or the datagram ended before the token did
  BadTokenLength(u8),

  /// An option was malformed
  BadOption(OptParseError),

  /// An option declared a value longer than the rest of the datagram
  #[allow(missing_docs)]
  OptionValueTooBig { len: usize, remaining: usize },

  /// The options ended on a byte that was not the payload marker
  ExtraDataAtEnd(u8),
}

impl From<OptParseError> for MessageParseError {
  fn from(e: OptParseError) -> Self {
    match e {
      | OptParseError::ValueTooBig { len, remaining } => {
        Self::OptionValueTooBig { len, remaining }
      },
      | e => Self::BadOption(e),
    }
  }
}

impl fmt::Display for MessageParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::PacketTooSmall(n) => write!(f, "packet too small ({} bytes)", n),
      | Self::PacketTooBig(n) => write!(f, "packet too big ({} bytes)", n),
      | Self::BadVersion(v) => write!(f, "bad CoAP version {}", v),
      | Self::BadTokenLength(n) => write!(f, "bad token length {}", n),
      | Self::BadOption(e) => write!(f, "bad option: {}", e),
      | Self::OptionValueTooBig { len, remaining } => {
        write!(f,
               "option value size too big ({} bytes, {} left in packet)",
               len, remaining)
      },
      | Self::ExtraDataAtEnd(b) => write!(f, "extra data at end of packet (0x{:02x})", b),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for MessageParseError {}
