use core::fmt;

use std_alloc::vec::Vec;

use coap_common::{BoundedBuf, Overflow};

use crate::config::Config;
use crate::validate::MAX_PACKET_SIZE;
use crate::*;

/// Trait allowing fallible conversion into bytes
pub trait TryIntoBytes {
  /// Error type yielded if conversion fails
  type Error;

  /// Try to convert into a datagram of at most `max_size` bytes
  ///
  /// ```
  /// use coap_packet::{Code, Id, MessageToBytesError, Packet, Payload, TryIntoBytes};
  ///
  /// let msg = Packet { code: Code::GET,
  ///                    id: Id(1),
  ///                    payload: Some(Payload(b"hi".to_vec())),
  ///                    ..Default::default() };
  ///
  /// assert_eq!(msg.try_into_bytes(1152).unwrap(),
  ///            vec![0x40, 0x01, 0x00, 0x01, 0xFF, 0x68, 0x69]);
  ///
  /// assert_eq!(msg.try_into_bytes(6),
  ///            Err(MessageToBytesError::BufferOverflow { capacity: 6, size: 7 }));
  /// ```
  fn try_into_bytes(&self, max_size: usize) -> Result<Vec<u8>, Self::Error>;
}

/// Why an option could not be written
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptEncodeError {
  /// Options must be written in ascending number order;
  /// this one came after a larger number
  #[allow(missing_docs)]
  OutOfOrder { prev: OptNumber },
  /// Option value was longer than 65535 bytes
  ValueTooLong(usize),
  /// A [`OptValues::Multiple`] held fewer than 2 values,
  /// so it would decode as something else
  NotRepeated(usize),
}

/// Errors encounterable serializing to bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageToBytesError {
  /// An option could not be written
  #[allow(missing_docs)]
  BadOption { number: OptNumber, reason: OptEncodeError },
  /// A token of more than 8 bytes was supplied
  BadToken(usize),
  /// Code class does not fit in 3 bits or detail does not fit in 5
  BadCode(Code),
  /// Reserved capacity was not enough for size of message
  #[allow(missing_docs)]
  BufferOverflow { capacity: usize, size: usize },
  /// The bytes produced do not parse back into a message
  EncodingError(MessageParseError),
}

impl From<Overflow> for MessageToBytesError {
  fn from(Overflow { capacity, size }: Overflow) -> Self {
    Self::BufferOverflow { capacity, size }
  }
}

impl fmt::Display for OptEncodeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::OutOfOrder { prev } => write!(f, "follows option {}", prev.0),
      | Self::ValueTooLong(n) => write!(f, "value of {} bytes is too long", n),
      | Self::NotRepeated(n) => write!(f, "repeated option holds {} values", n),
    }
  }
}

impl fmt::Display for MessageToBytesError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Self::BadOption { number, reason } => write!(f, "bad option {}: {}", number.0, reason),
      | Self::BadToken(n) => write!(f, "bad token ({} bytes)", n),
      | Self::BadCode(c) => write!(f, "code {}.{} does not fit in a byte", c.class, c.detail),
      | Self::BufferOverflow { capacity, size } => {
        write!(f,
               "message of at least {} bytes does not fit in {}",
               size, capacity)
      },
      | Self::EncodingError(e) => write!(f, "encoding error, bad packet: {}", e),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for MessageToBytesError {}

/// Header, options, payload; then parse the result back to make sure it's sound.
fn encode(msg: &Packet, max_size: usize) -> Result<Vec<u8>, MessageToBytesError> {
  let capacity = max_size.min(MAX_PACKET_SIZE);
  let mut bytes = BoundedBuf::with_size_hint(capacity, msg.wire_size());

  msg.header().extend_bytes(&mut bytes)?;
  opt::check_repeats(&msg.opts)?;
  opt::write_opts(opt::flatten_opts(&msg.opts), &mut bytes)?;
  payload::extend_bytes(msg.payload.as_ref(), &mut bytes)?;

  crate::validate::verify(bytes.as_slice()).map_err(MessageToBytesError::EncodingError)?;

  Ok(bytes.into_inner())
}

impl TryIntoBytes for Packet {
  type Error = MessageToBytesError;

  fn try_into_bytes(&self, max_size: usize) -> Result<Vec<u8>, Self::Error> {
    let encoded = encode(self, max_size);

    match &encoded {
      | Ok(bytes) => log::trace!("encoded {} into {} bytes", self, bytes.len()),
      | Err(e) => log::debug!("failed to encode {}: {}", self, e),
    }

    encoded
  }
}

impl Packet {
  /// Serialize using the limits in [`Config::default`]
  pub fn to_bytes(&self) -> Result<Vec<u8>, MessageToBytesError> {
    self.to_bytes_with(&Config::default())
  }

  /// Serialize using the limits in `config`
  pub fn to_bytes_with(&self, config: &Config) -> Result<Vec<u8>, MessageToBytesError> {
    self.try_into_bytes(config.max_message_size)
  }
}
