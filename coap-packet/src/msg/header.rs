use coap_common::{BoundedBuf, Cursor};

use super::{Code, Id, MessageParseError, Token, Type, Version};
use crate::from_bytes::TryConsumeBytes;
use crate::to_bytes::MessageToBytesError;

/// Size of the fixed part of the header (byte 1, code & message id)
pub const HEADER_SIZE: usize = 4;

/// Longest token permitted by RFC7252
pub const MAX_TOKEN_LEN: usize = 8;

/// Struct representing the first byte of a message.
///
/// ```text
/// CoAP version
/// |
/// |  Message type (request, response, empty)
/// |  |
/// |  |  Length of token, in bytes. (4-bit integer)
/// |  |  |
/// vv vv vvvv
/// 01 00 0000
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub(crate) struct Byte1 {
  pub(crate) ver: Version,
  pub(crate) ty: Type,
  pub(crate) tkl: u8,
}

impl From<u8> for Byte1 {
  fn from(b: u8) -> Self {
    let ver = b >> 6; // bits 0 & 1
    let ty = b >> 4 & 0b11; // bits 2 & 3
    let tkl = b & 0b1111u8; // last 4 bits

    Byte1 { ver: Version(ver),
            ty: Type::from_bits(ty),
            tkl }
  }
}

impl From<Byte1> for u8 {
  fn from(b: Byte1) -> u8 {
    let ver = b.ver.0 << 6;
    let ty = u8::from(b.ty) << 4;
    let tkl = b.tkl;

    ver | ty | tkl
  }
}

/// Everything in a message that precedes the options
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Header {
  pub(crate) ver: Version,
  pub(crate) ty: Type,
  pub(crate) code: Code,
  pub(crate) id: Id,
  pub(crate) token: Token,
}

impl Header {
  /// Size of the header & token on the wire
  pub(crate) fn size(&self) -> usize {
    HEADER_SIZE + self.token.0.len()
  }

  /// Write the header & token to `bytes`.
  ///
  /// Versions wider than the 2-bit field and codes wider than
  /// their 3 + 5 bits are refused rather than truncated.
  pub(crate) fn extend_bytes(&self, bytes: &mut BoundedBuf) -> Result<(), MessageToBytesError> {
    if self.ver.0 > 0b11 {
      return Err(MessageToBytesError::EncodingError(MessageParseError::BadVersion(self.ver.0)));
    }

    if self.code.class > 0b111 || self.code.detail > 0b11111 {
      return Err(MessageToBytesError::BadCode(self.code));
    }

    let byte1: u8 = Byte1 { tkl: self.token.0.len() as u8,
                            ver: self.ver,
                            ty: self.ty }.into();
    let code: u8 = self.code.into();
    let id: [u8; 2] = self.id.into();

    bytes.push(byte1)?;
    bytes.push(code)?;
    bytes.extend_from_slice(&id)?;
    bytes.extend_from_slice(&self.token.0)?;

    Ok(())
  }
}

impl<Bytes: AsRef<[u8]>> TryConsumeBytes<Bytes> for Header {
  type Error = MessageParseError;

  fn try_consume_bytes(bytes: &mut Cursor<Bytes>) -> Result<Self, Self::Error> {
    let remaining = bytes.remaining();
    let (byte1, code, id) = match bytes.take_exact(HEADER_SIZE) {
      | Some(&[b, c, id0, id1]) => (Byte1::from(b), Code::from(c), Id::from_be_bytes([id0, id1])),
      | _ => return Err(MessageParseError::PacketTooSmall(remaining)),
    };

    let Byte1 { ver, ty, tkl } = byte1;

    if ver != Version::V1 {
      return Err(MessageParseError::BadVersion(ver.0));
    }

    if tkl as usize > MAX_TOKEN_LEN {
      return Err(MessageParseError::BadTokenLength(tkl));
    }

    let token = bytes.take_exact(tkl as usize)
                     .and_then(|t| Token::try_from(t).ok())
                     .ok_or(MessageParseError::BadTokenLength(tkl))?;

    Ok(Header { ver,
                ty,
                code,
                id,
                token })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{assert_eqb, assert_eqb_iter};

  fn consume(bytes: &[u8]) -> Result<Header, MessageParseError> {
    Header::try_consume_bytes(&mut Cursor::new(bytes))
  }

  #[test]
  fn parse_byte1() {
    let byte = 0b_01_10_0011u8;
    let byte = Byte1::from(byte);
    assert_eq!(byte,
               Byte1 { ver: Version(1),
                       ty: Type::Ack,
                       tkl: 3 })
  }

  #[test]
  fn byte_1() {
    let byte = Byte1 { ver: Version(1),
                       ty: Type::Ack,
                       tkl: 3 };
    let actual: u8 = byte.into();
    let expected = 0b_01_10_0011u8;
    assert_eqb!(actual, expected)
  }

  #[test]
  fn parse_header() {
    let header = consume(&[0x42, 0x01, 0x74, 0xaa, 0x73, 0xaa, 0xff]).unwrap();
    assert_eq!(header,
               Header { ver: Version(1),
                        ty: Type::Con,
                        code: Code::GET,
                        id: Id(0x74aa),
                        token: Token(tinyvec::array_vec!([u8; 8] => 0x73, 0xaa)) });
    assert_eq!(header.size(), 6);
  }

  #[test]
  fn too_small() {
    assert_eq!(consume(&[0x40, 0x01, 0x00]),
               Err(MessageParseError::PacketTooSmall(3)));
  }

  #[test]
  fn bad_version() {
    [0b00_00_0000u8, 0b10_00_0000, 0b11_00_0000].into_iter()
                                                 .for_each(|b| {
                                                   assert_eq!(consume(&[b, 0, 0, 0]),
                                                              Err(MessageParseError::BadVersion(b >> 6)))
                                                 });
  }

  #[test]
  fn token_length() {
    assert_eq!(consume(&[0x49, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
               Err(MessageParseError::BadTokenLength(9)));

    let header = consume(&[0x48, 0, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    assert_eq!(&*header.token, &[1, 2, 3, 4, 5, 6, 7, 8]);

    assert_eq!(consume(&[0x44, 0, 0, 0, 1, 2]),
               Err(MessageParseError::BadTokenLength(4)));
  }

  #[test]
  fn write_header() {
    let header = Header { ver: Version(1),
                          ty: Type::Non,
                          code: Code::CONTENT,
                          id: Id(16),
                          token: Token(tinyvec::array_vec!([u8; 8] => 254)) };
    let mut bytes = BoundedBuf::new(16);
    header.extend_bytes(&mut bytes).unwrap();
    assert_eqb_iter!(bytes.as_slice(), [0b_01_01_0001u8, 0b010_00101, 0, 16, 254]);
  }

  #[test]
  fn write_header_refuses_wide_version() {
    let header = Header { ver: Version(4),
                          ty: Type::Con,
                          code: Code::EMPTY,
                          id: Id(0),
                          token: Token::default() };
    let mut bytes = BoundedBuf::new(16);
    assert_eq!(header.extend_bytes(&mut bytes),
               Err(MessageToBytesError::EncodingError(MessageParseError::BadVersion(4))));
    assert!(bytes.is_empty());
  }

  #[test]
  fn write_header_refuses_wide_code() {
    [Code::new(8, 0), Code::new(0, 32), Code::new(8, 40)].into_iter()
                                                         .for_each(|code| {
                                                           let header = Header { ver: Version(1),
                                                                                 ty: Type::Con,
                                                                                 code,
                                                                                 id: Id(0),
                                                                                 token: Token::default() };
                                                           let mut bytes = BoundedBuf::new(16);
                                                           assert_eq!(header.extend_bytes(&mut bytes),
                                                                      Err(MessageToBytesError::BadCode(code)));
                                                           assert!(bytes.is_empty());
                                                         });
  }
}
