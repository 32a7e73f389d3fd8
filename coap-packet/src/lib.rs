//! Strict decoding & encoding of single CoAP (RFC7252) datagrams.
//!
//! The most notable item in `coap_packet` is [`Packet`];
//! an owned CoAP message that maps one-to-one onto the wire layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |Ver| T |  TKL  |      Code     |          Message ID           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |   Token (if any, TKL bytes) ...
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |   Options (if any) ...
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |1 1 1 1 1 1 1 1|    Payload (if any) ...
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! ## Decoding
//! [`TryFromBytes`] accepts any datagram between 4 and 65535 bytes that is
//! well-formed; anything else is rejected with a [`MessageParseError`] naming
//! the first problem found. Nothing is ever partially decoded.
//!
//! ## Encoding
//! [`TryIntoBytes`] writes a message into a buffer of bounded size, failing with
//! [`MessageToBytesError`] instead of truncating. Every encoded message is
//! parsed again (see [`validate::verify`]) before it is handed back, so the
//! encoder never yields bytes the decoder would refuse.
//!
//! ```
//! use coap_packet::*;
//!
//! let mut req = Packet { ty: Type::Con,
//!                        code: Code::GET,
//!                        id: Id(0x74aa),
//!                        token: Token::opaque(b"temperature"),
//!                        ..Default::default() };
//! req.add(opt::repeat::PATH, &b"sensors"[..]);
//! req.add(opt::repeat::PATH, &b"temp"[..]);
//!
//! let bytes = req.to_bytes().unwrap();
//! assert_eq!(Packet::try_from_bytes(&bytes).unwrap(), req);
//! ```
//!
//! ## Performance
//! This crate uses `criterion` to measure encoding & decoding against `coap_lite::Packet`;
//! run `cargo bench -p coap-packet` to compare.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code, missing_copy_implementations))]
#![cfg_attr(any(docsrs, feature = "docs"), feature(doc_cfg))]
#![deny(missing_docs)]

extern crate alloc as std_alloc;

#[doc(hidden)]
pub mod from_bytes;

/// Message structs
pub mod msg;

#[doc(hidden)]
pub mod to_bytes;

/// Datagram checks that do not build a message
pub mod validate;

/// Serialization limits
pub mod config;

#[doc(inline)]
pub use from_bytes::TryFromBytes;
#[doc(inline)]
pub use msg::*;
#[doc(inline)]
pub use to_bytes::{MessageToBytesError, OptEncodeError, TryIntoBytes};

#[cfg(test)]
pub(crate) fn test_msg() -> (Packet, Vec<u8>) {
  let header: [u8; 4] = 0b0100_0001_0100_0101_0000_0000_0000_0001_u32.to_be_bytes();
  let token: [u8; 1] = [254u8];
  let path: [u8; 4] = [0b1011_0001, b'a', 0b0000_0001, b'b'];
  let content_format: [u8; 2] = [0b0001_0001, 50];
  let payload: [&[u8]; 2] = [&[0b1111_1111_u8], b"hello, world!"];
  let bytes = [&header[..],
               &token[..],
               &path[..],
               &content_format[..],
               &payload.concat()[..]].concat();

  let opts = OptionMap::from([(opt::repeat::PATH,
                               OptValues::Multiple(vec![OptValue(b"a".to_vec()),
                                                        OptValue(b"b".to_vec())])),
                              (opt::no_repeat::CONTENT_FORMAT,
                               OptValues::Single(OptValue(vec![50])))]);

  let msg = Packet { id: Id(1),
                     ty: Type::Con,
                     ver: Version(1),
                     token: Token(tinyvec::array_vec!([u8; 8] => 254)),
                     opts,
                     code: Code { class: 2,
                                  detail: 5 },
                     payload: Some(Payload(b"hello, world!".to_vec())) };
  (msg, bytes)
}
