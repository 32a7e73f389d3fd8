use std_alloc::vec::Vec;

use coap_common::{BoundedBuf, Cursor};
use toad_macros::rfc_7252_doc;

use super::MessageParseError;
use crate::to_bytes::MessageToBytesError;

/// Byte separating the options from the payload
pub const PAYLOAD_MARKER: u8 = 0b11111111;

#[doc = rfc_7252_doc!("5.5")]
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Payload(pub Vec<u8>);

impl Payload {
  /// Borrow the payload bytes
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }
}

impl From<Vec<u8>> for Payload {
  fn from(v: Vec<u8>) -> Self {
    Self(v)
  }
}

impl<'a> From<&'a [u8]> for Payload {
  fn from(v: &'a [u8]) -> Self {
    Self(v.to_vec())
  }
}

/// Consume what follows the options.
///
/// - nothing left: there is no payload
/// - the payload marker: everything after it is the payload
/// - anything else is an error
pub(crate) fn try_consume_payload<'c, A: AsRef<[u8]>>(
  bytes: &'c mut Cursor<A>)
  -> Result<Option<&'c [u8]>, MessageParseError> {
  match bytes.next() {
    | None => Ok(None),
    | Some(PAYLOAD_MARKER) => Ok(Some(bytes.take_until_end())),
    | Some(other) => Err(MessageParseError::ExtraDataAtEnd(other)),
  }
}

/// Write the payload marker followed by the payload, if there is one.
pub(crate) fn extend_bytes(payload: Option<&Payload>,
                           bytes: &mut BoundedBuf)
                           -> Result<(), MessageToBytesError> {
  if let Some(p) = payload {
    bytes.push(PAYLOAD_MARKER)?;
    bytes.extend_from_slice(&p.0)?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent() {
    let mut bytes = Cursor::new([0u8; 0]);
    assert_eq!(try_consume_payload(&mut bytes), Ok(None));
  }

  #[test]
  fn present() {
    let mut bytes = Cursor::new([0xFFu8, 0x68, 0x69]);
    assert_eq!(try_consume_payload(&mut bytes), Ok(Some(&b"hi"[..])));
    assert!(bytes.is_exhausted());
  }

  #[test]
  fn marker_then_nothing() {
    let mut bytes = Cursor::new([0xFFu8]);
    assert_eq!(try_consume_payload(&mut bytes), Ok(Some(&[][..])));
  }

  #[test]
  fn extra_data_at_end() {
    let mut bytes = Cursor::new([0x01u8, 0xFF, 0x68]);
    assert_eq!(try_consume_payload(&mut bytes),
               Err(MessageParseError::ExtraDataAtEnd(0x01)));
  }

  #[test]
  fn write_payload() {
    let mut bytes = BoundedBuf::new(3);
    extend_bytes(None, &mut bytes).unwrap();
    assert!(bytes.is_empty());

    extend_bytes(Some(&Payload(b"hi".to_vec())), &mut bytes).unwrap();
    assert_eq!(bytes.as_slice(), &[0xFF, 0x68, 0x69]);
  }

  #[test]
  fn write_payload_overflow() {
    let mut bytes = BoundedBuf::new(2);
    assert_eq!(extend_bytes(Some(&Payload(b"hi".to_vec())), &mut bytes),
               Err(MessageToBytesError::BufferOverflow { capacity: 2,
                                                         size: 3 }));
  }
}
