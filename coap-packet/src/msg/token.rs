use core::ops::Deref;

use tinyvec::ArrayVec;
use toad_macros::rfc_7252_doc;

use crate::to_bytes::MessageToBytesError;

#[doc = rfc_7252_doc!("5.3.1")]
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Token(pub ArrayVec<[u8; 8]>);

impl Token {
  /// Take an arbitrary-length sequence of bytes and turn it into an opaque message token
  ///
  /// Currently uses the BLAKE2 hashing algorithm, but this may change in the future.
  ///
  /// ```
  /// use coap_packet::Token;
  ///
  /// let my_token = Token::opaque(&[0, 1, 2]);
  /// assert_eq!(my_token.len(), 8);
  /// assert_eq!(my_token, Token::opaque(&[0, 1, 2]));
  /// ```
  pub fn opaque(data: &[u8]) -> Token {
    use blake2::digest::consts::U8;
    use blake2::{Blake2b, Digest};

    let mut digest = Blake2b::<U8>::new();
    digest.update(data);
    Token(Into::<[u8; 8]>::into(digest.finalize()).into())
  }
}

impl Deref for Token {
  type Target = [u8];

  fn deref(&self) -> &[u8] {
    &self.0
  }
}

/// Tokens are limited to 8 bytes; longer slices
/// yield [`MessageToBytesError::BadToken`].
///
/// ```
/// use coap_packet::{MessageToBytesError, Token};
///
/// assert_eq!(Token::try_from(&[1u8, 2][..]).unwrap().len(), 2);
/// assert_eq!(Token::try_from(&[0u8; 9][..]),
///            Err(MessageToBytesError::BadToken(9)));
/// ```
impl<'a> TryFrom<&'a [u8]> for Token {
  type Error = MessageToBytesError;

  fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
    if bytes.len() > 8 {
      return Err(MessageToBytesError::BadToken(bytes.len()));
    }

    let mut token = ArrayVec::new();
    token.extend_from_slice(bytes);
    Ok(Token(token))
  }
}
