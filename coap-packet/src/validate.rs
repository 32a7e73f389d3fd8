use coap_common::Cursor;

use crate::from_bytes::TryConsumeBytes;
use crate::msg::header::{Header, HEADER_SIZE};
use crate::msg::{opt, payload, MessageParseError, OptNumber};

/// Smallest possible datagram; a header with no token, options or payload
pub const MIN_PACKET_SIZE: usize = HEADER_SIZE;

/// Largest datagram we will parse
pub const MAX_PACKET_SIZE: usize = u16::MAX as usize;

/// Reject datagram sizes outside `MIN_PACKET_SIZE..=MAX_PACKET_SIZE`.
///
/// ```
/// use coap_packet::validate::check_size;
/// use coap_packet::MessageParseError;
///
/// assert_eq!(check_size(3), Err(MessageParseError::PacketTooSmall(3)));
/// assert_eq!(check_size(65535), Ok(()));
/// assert_eq!(check_size(65536), Err(MessageParseError::PacketTooBig(65536)));
/// ```
pub fn check_size(len: usize) -> Result<(), MessageParseError> {
  match len {
    | n if n < MIN_PACKET_SIZE => Err(MessageParseError::PacketTooSmall(n)),
    | n if n > MAX_PACKET_SIZE => Err(MessageParseError::PacketTooBig(n)),
    | _ => Ok(()),
  }
}

/// Check that `bytes` is a well-formed message without building a [`Packet`](crate::Packet).
///
/// Runs exactly the checks [`TryFromBytes`](crate::TryFromBytes) does, in the same order,
/// and fails with the same error, but copies nothing out of `bytes`.
///
/// ```
/// use coap_packet::validate::verify;
/// use coap_packet::MessageParseError;
///
/// assert_eq!(verify(&[0x40, 0x01, 0x00, 0x01, 0xFF, 0x68, 0x69]), Ok(()));
/// assert_eq!(verify(&[0x80, 0x01, 0x00, 0x01]), Err(MessageParseError::BadVersion(2)));
/// ```
pub fn verify(bytes: &[u8]) -> Result<(), MessageParseError> {
  check_size(bytes.len())?;

  let mut bytes = Cursor::new(bytes);
  Header::try_consume_bytes(&mut bytes)?;

  let mut number = OptNumber(0);
  while let Some((n, _)) = opt::try_consume_opt(&mut bytes, number)? {
    number = n;
  }

  payload::try_consume_payload(&mut bytes)?;

  Ok(())
}
