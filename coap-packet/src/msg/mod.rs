use core::fmt;

use coap_common::Cursor;
use toad_macros::rfc_7252_doc;

/// Message Code
pub mod code;

/// Fixed header & token
pub mod header;

/// Message parsing errors
pub mod parse_error;

/// Message ID
pub mod id;

/// Message Options
pub mod opt;

/// Message Payload
pub mod payload;

/// Message Type
pub mod ty;

/// Message Token
pub mod token;

/// Message Version
pub mod ver;

pub use code::*;
pub use header::{HEADER_SIZE, MAX_TOKEN_LEN};
pub use id::*;
pub use opt::*;
pub use parse_error::*;
pub use payload::*;
pub use token::*;
pub use ty::*;
pub use ver::*;

use crate::from_bytes::TryConsumeBytes;
use crate::TryFromBytes;
use header::Header;

/// # `Packet` struct
/// A CoAP message, parsed out of (or ready to be written as) a single datagram.
///
/// A `Packet` owns every buffer it holds; nothing borrows from the bytes it was parsed from.
///
/// Options are kept in an [`OptionMap`], ordered by [`OptNumber`].
/// An option that appears more than once is stored as [`OptValues::Multiple`],
/// with its values in the order they appeared on the wire.
///
/// Packets support both serializing to bytes and from bytes, by using the provided [`TryFromBytes`] and [`TryIntoBytes`](crate::TryIntoBytes) traits.
///
/// <details>
/// <summary><b>RFC7252 - CoAP Messaging Model</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("2.1"))]
/// </details>
/// <details>
/// <summary><b>RFC7252 - CoAP Message Binary Format</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("3"))]
/// </details>
///
/// ```
/// use coap_packet::*;
///
/// //                       version  token len  code (0.01 GET)
/// //                       |        |          /
/// //                       |  type  |         /  message ID
/// //                       |  |     |        |   |
/// //                       vv vv vvvv vvvvvvvv vvvvvvvvvvvvvvvv
/// let header: [u8; 4] = 0b_01_00_0000_00000001_0000000000000001u32.to_be_bytes();
/// let content_format: [u8; 2] = [0b_1100_0001, 50];
/// let payload: [u8; 3] = [0b_11111111, b'{', b'}'];
/// let packet: Vec<u8> = [&header[..], &content_format[..], &payload[..]].concat();
///
/// let msg = Packet::try_from_bytes(&packet).unwrap();
///
/// assert_eq!(msg.code, Code::GET);
/// assert_eq!(msg.id, Id(1));
/// assert_eq!(msg.content_format(), Some(ContentFormat::Json));
/// assert_eq!(msg.payload, Some(Payload(b"{}".to_vec())));
///
/// assert_eq!(msg.try_into_bytes(1152).unwrap(), packet);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Packet {
  /// see [`Version`] for details
  pub ver: Version,
  /// see [`Type`] for details
  pub ty: Type,
  /// see [`Code`] for details
  pub code: Code,
  /// see [`Id`] for details
  pub id: Id,
  /// see [`Token`] for details
  pub token: Token,
  /// see [`OptionMap`] for details
  pub opts: OptionMap,
  /// see [`Payload`]; `None` when the datagram has no payload marker
  pub payload: Option<Payload>,
}

impl Packet {
  pub(crate) fn header(&self) -> Header {
    Header { ver: self.ver,
             ty: self.ty,
             code: self.code,
             id: self.id,
             token: self.token }
  }

  /// Get the value(s) of an option
  pub fn get(&self, number: OptNumber) -> Option<&OptValues> {
    self.opts.get(&number)
  }

  /// Add an occurrence of an option, after any existing occurrences.
  ///
  /// ```
  /// use coap_packet::{opt, OptValue, OptValues, Packet};
  ///
  /// let mut msg = Packet::default();
  /// msg.add(opt::repeat::PATH, &b"sensors"[..]);
  /// msg.add(opt::repeat::PATH, &b"temp"[..]);
  ///
  /// assert_eq!(msg.get(opt::repeat::PATH),
  ///            Some(&OptValues::Multiple(vec![OptValue(b"sensors".to_vec()),
  ///                                           OptValue(b"temp".to_vec())])));
  /// ```
  pub fn add<V: Into<OptValue>>(&mut self, number: OptNumber, value: V) {
    opt::insert_opt(&mut self.opts, number, value.into());
  }

  /// Replace every occurrence of an option with a single value,
  /// yielding what was there before.
  pub fn set<V: Into<OptValue>>(&mut self, number: OptNumber, value: V) -> Option<OptValues> {
    self.opts.insert(number, OptValues::Single(value.into()))
  }

  /// Remove every occurrence of an option
  pub fn remove(&mut self, number: OptNumber) -> Option<OptValues> {
    self.opts.remove(&number)
  }

  /// Read the Content-Format option
  pub fn content_format(&self) -> Option<ContentFormat> {
    self.get(opt::no_repeat::CONTENT_FORMAT)
        .and_then(OptValues::first)
        .and_then(OptValue::as_uint)
        .and_then(|n| u16::try_from(n).ok())
        .map(ContentFormat::from)
  }

  /// Set the Content-Format option
  pub fn set_content_format(&mut self, format: ContentFormat) {
    self.set(opt::no_repeat::CONTENT_FORMAT,
             OptValue(format.bytes().into_iter().collect()));
  }

  /// Number of bytes this message takes up on the wire
  ///
  /// ```
  /// use coap_packet::{Packet, Payload};
  ///
  /// let msg = Packet { payload: Some(Payload(b"hi".to_vec())),
  ///                    ..Default::default() };
  /// assert_eq!(msg.wire_size(), 7);
  /// ```
  pub fn wire_size(&self) -> usize {
    let mut prev = OptNumber(0);
    let mut opts_size = 0;

    for (number, value) in opt::flatten_opts(&self.opts) {
      let len = value.0.len();
      let delta = number.0.saturating_sub(prev.0);
      opts_size += opt::opt_header_size(delta, u16::try_from(len).unwrap_or(u16::MAX)) + len;
      prev = number;
    }

    let payload_size = self.payload.as_ref().map(|p| 1 + p.0.len()).unwrap_or(0);

    self.header().size() + opts_size + payload_size
  }

  /// Create a new message that ACKs this one.
  ///
  /// The ACK echoes this message's [`Id`] and carries no token,
  /// options or payload.
  ///
  /// ```
  /// use coap_packet::{Code, Id, Packet, Type};
  ///
  /// let req = Packet { ty: Type::Con,
  ///                    code: Code::GET,
  ///                    id: Id(7),
  ///                    ..Default::default() };
  /// let ack = req.ack();
  ///
  /// assert_eq!(ack.ty, Type::Ack);
  /// assert_eq!(ack.id, Id(7));
  /// assert_eq!(ack.code, Code::EMPTY);
  /// ```
  pub fn ack(&self) -> Self {
    Self { id: self.id,
           ty: Type::Ack,
           ..Default::default() }
  }
}

impl fmt::Display for Packet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f,
           "{} {} id={} token={:02x?} with {} options and ",
           self.ty,
           self.code,
           self.id.0,
           &*self.token,
           self.opts.values().map(OptValues::len).sum::<usize>())?;

    match &self.payload {
      | Some(p) => write!(f, "{} byte payload", p.0.len()),
      | None => f.write_str("no payload"),
    }
  }
}

/// Header, then options, then payload; the first error wins.
fn decode<Bytes: AsRef<[u8]>>(bytes: Bytes) -> Result<Packet, MessageParseError> {
  crate::validate::check_size(bytes.as_ref().len())?;

  let mut bytes = Cursor::new(bytes);

  let Header { ver,
               ty,
               code,
               id,
               token, } = Header::try_consume_bytes(&mut bytes)?;

  let opts = OptionMap::try_consume_bytes(&mut bytes)?;

  let payload = payload::try_consume_payload(&mut bytes)?.map(Payload::from);

  Ok(Packet { ver,
              ty,
              code,
              id,
              token,
              opts,
              payload })
}

impl<Bytes: AsRef<[u8]>> TryFromBytes<Bytes> for Packet {
  type Error = MessageParseError;

  fn try_from_bytes(bytes: Bytes) -> Result<Self, Self::Error> {
    let len = bytes.as_ref().len();
    let parsed = decode(bytes);

    match &parsed {
      | Ok(msg) => log::trace!("decoded {}", msg),
      | Err(e) => log::debug!("rejected {} byte datagram: {}", len, e),
    }

    parsed
  }
}
