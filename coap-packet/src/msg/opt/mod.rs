use std_alloc::collections::BTreeMap;
use std_alloc::vec;
use std_alloc::vec::Vec;

use coap_common::{BoundedBuf, Cursor};
use tinyvec::ArrayVec;
use toad_macros::rfc_7252_doc;

use crate::from_bytes::TryConsumeBytes;
use crate::to_bytes::{MessageToBytesError, OptEncodeError};

/// Option parsing errors
pub mod parse_error;
pub use parse_error::*;

/// Well-known option numbers & values
pub mod known;
pub use known::*;

/// Largest option value we are willing to write
pub const MAX_OPT_VALUE_LEN: usize = u16::MAX as usize;

/// Read the extended form of a delta or length nibble.
///
/// `13` means one extra byte (`+ 13`) follows, `14` means two extra
/// big-endian bytes (`+ 269`) follow, and `15` is reserved.
pub(crate) fn parse_opt_len_or_delta<A: AsRef<[u8]>>(head: u8,
                                                     bytes: &mut Cursor<A>,
                                                     reserved_err: OptParseError)
                                                     -> Result<u32, OptParseError> {
  match head {
    | 13 => {
      let n = bytes.next().ok_or_else(OptParseError::eof)?;
      Ok((n as u32) + 13)
    },
    | 14 => match bytes.take_exact(2) {
      | Some(&[a, b]) => Ok((u16::from_be_bytes([a, b]) as u32) + 269),
      | _ => Err(OptParseError::eof()),
    },
    | 15 => Err(reserved_err),
    | _ => Ok(head as u32),
  }
}

/// Inverse of [`parse_opt_len_or_delta`]; yields the nibble and
/// the extension bytes (if any) that must follow the option header.
pub(crate) fn opt_len_or_delta(val: u16) -> (u8, Option<ArrayVec<[u8; 2]>>) {
  match val {
    | n if n >= 269 => {
      let mut bytes = ArrayVec::new();
      bytes.extend((n - 269).to_be_bytes());
      (14, Some(bytes))
    },
    | n if n >= 13 => {
      let mut bytes = ArrayVec::new();
      bytes.push((n - 13) as u8);
      (13, Some(bytes))
    },
    | n => (n as u8, None),
  }
}

/// Number of bytes an option header (control byte + extensions) takes up
pub(crate) fn opt_header_size(delta: u16, len: u16) -> usize {
  let ext = |n: u16| match n {
    | n if n >= 269 => 2,
    | n if n >= 13 => 1,
    | _ => 0,
  };

  1 + ext(delta) + ext(len)
}

/// Consume one option entry, yielding its number and a view of its value.
///
/// Yields `Ok(None)` without consuming anything when the cursor is
/// exhausted or sitting on the payload marker.
pub(crate) fn try_consume_opt<'c, A: AsRef<[u8]>>(
  bytes: &'c mut Cursor<A>,
  prev: OptNumber)
  -> Result<Option<(OptNumber, &'c [u8])>, OptParseError> {
  let byte1 = match bytes.peek() {
    | None | Some(0b11111111) => return Ok(None),
    | Some(b) => b,
  };
  bytes.skip(1);

  // NOTE: Delta **MUST** be consumed before Value; both extensions follow the header byte in that order
  let delta = parse_opt_len_or_delta(byte1 >> 4,
                                     bytes,
                                     OptParseError::OptionDeltaReservedValue(15))?;
  let len = parse_opt_len_or_delta(byte1 & 0b00001111,
                                   bytes,
                                   OptParseError::ValueLengthReservedValue(15))?
            as usize;

  let number = prev.0 as u32 + delta;
  let number = u16::try_from(number).map(OptNumber)
                                    .map_err(|_| OptParseError::NumberOverflow(number))?;

  let remaining = bytes.remaining();
  let value = bytes.take_exact(len)
                   .ok_or(OptParseError::ValueTooBig { len, remaining })?;

  Ok(Some((number, value)))
}

/// Write one option entry: header byte, delta & length extensions, then the value.
fn write_opt(delta: u16, value: &[u8], bytes: &mut BoundedBuf) -> Result<(), MessageToBytesError> {
  let (del, del_bytes) = opt_len_or_delta(delta);
  let (len, len_bytes) = opt_len_or_delta(value.len() as u16);

  bytes.push(del << 4 | len)?;

  if let Some(bs) = del_bytes {
    bytes.extend_from_slice(&bs)?;
  }

  if let Some(bs) = len_bytes {
    bytes.extend_from_slice(&bs)?;
  }

  bytes.extend_from_slice(value)?;
  Ok(())
}

/// Write a sequence of `(number, value)` pairs as delta-encoded option entries.
///
/// Numbers must never decrease; repeated numbers are written as
/// consecutive entries with a delta of zero.
///
/// ```
/// use coap_common::BoundedBuf;
/// use coap_packet::{opt, MessageToBytesError, OptEncodeError, OptNumber, OptValue};
///
/// let path = OptValue::from(&b"a"[..]);
/// let mut buf = BoundedBuf::new(32);
/// opt::write_opts([(OptNumber(11), &path), (OptNumber(11), &path)], &mut buf).unwrap();
/// assert_eq!(buf.as_slice(), &[0xB1, b'a', 0x01, b'a']);
///
/// let mut buf = BoundedBuf::new(32);
/// assert_eq!(opt::write_opts([(OptNumber(12), &path), (OptNumber(11), &path)], &mut buf),
///            Err(MessageToBytesError::BadOption { number: OptNumber(11),
///                                                 reason: OptEncodeError::OutOfOrder { prev: OptNumber(12) } }));
/// ```
pub fn write_opts<'a, I>(opts: I, bytes: &mut BoundedBuf) -> Result<(), MessageToBytesError>
  where I: IntoIterator<Item = (OptNumber, &'a OptValue)>
{
  let mut prev = OptNumber(0);

  for (number, value) in opts {
    let delta = number.0
                      .checked_sub(prev.0)
                      .ok_or(MessageToBytesError::BadOption { number,
                                                              reason:
                                                                OptEncodeError::OutOfOrder { prev } })?;

    if value.0.len() > MAX_OPT_VALUE_LEN {
      return Err(MessageToBytesError::BadOption { number,
                                                  reason:
                                                    OptEncodeError::ValueTooLong(value.0.len()) });
    }

    write_opt(delta, &value.0, bytes)?;
    prev = number;
  }

  Ok(())
}

/// Make sure every [`OptValues::Multiple`] holds at least 2 values.
///
/// A `Multiple` of 1 decodes as [`OptValues::Single`] and a `Multiple`
/// of 0 does not decode at all, so neither may be written.
pub(crate) fn check_repeats(opts: &OptionMap) -> Result<(), MessageToBytesError> {
  opts.iter().try_for_each(|(number, vals)| match vals {
               | OptValues::Multiple(vs) if vs.len() < 2 => {
                 Err(MessageToBytesError::BadOption { number: *number,
                                                      reason: OptEncodeError::NotRepeated(vs.len()) })
               },
               | _ => Ok(()),
             })
}

#[doc = rfc_7252_doc!("5.4.6")]
/// <details><summary><b>RFC7252 Section 12.2 Core CoAP Option Numbers</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("12.2"))]
/// </details>
///
/// # `OptNumber` struct
/// On the wire only the difference between consecutive option numbers (the "delta")
/// is stored; parsing sums the deltas back up into absolute numbers.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct OptNumber(pub u16);

#[doc = rfc_7252_doc!("5.4.1")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum OptionMustBeProcessed {
  /// This option must be processed,
  /// and a response that ignores it
  /// will be rejected.
  ///
  /// Corresponds to the option being "critical"
  /// in strict CoAP terms
  Yes,
  /// This option does not _need_ to
  /// be processed,
  /// and a response that ignores it
  /// will be processed anyway.
  ///
  /// Corresponds to the option being "elective"
  /// in strict CoAP terms
  No,
}

#[doc = rfc_7252_doc!("5.4.2")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WhenOptionUnsupportedByProxy {
  /// This option /must be/ processed & understood by proxies
  /// and may not be forwarded blindly to their destination.
  ///
  /// Corresponds to the option being "UnSafe" to forward
  /// in strict CoAP terms
  Error,
  /// This option may not be processed & understood by proxies
  /// and may be forwarded blindly to their destination.
  ///
  /// Corresponds to the option being "SafeToForward"
  /// in strict CoAP terms
  Forward,
}

#[doc = rfc_7252_doc!("5.4.2")]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum WhenOptionChanges {
  /// Different values for this option should be part of
  /// a proxy's cache key.
  ///
  /// Corresponds to the option being not "NoCacheKey"
  /// in strict CoAP terms
  ResponseChanges,
  /// Different values for this option should
  /// yield the cached response.
  ///
  /// Corresponds to the option being "NoCacheKey"
  /// in strict CoAP terms
  ResponseDoesNotChange,
}

impl OptNumber {
  /// Whether or not this option may be ignored by a server
  pub fn must_be_processed(&self) -> OptionMustBeProcessed {
    match self.0 & 0b1 {
      | 1 => OptionMustBeProcessed::Yes,
      | _ => OptionMustBeProcessed::No,
    }
  }

  /// Whether or not this option may be forwarded blindly by
  /// a proxy that does not support processing it
  pub fn when_unsupported_by_proxy(&self) -> WhenOptionUnsupportedByProxy {
    match (self.0 & 0b10) >> 1 {
      | 1 => WhenOptionUnsupportedByProxy::Error,
      | _ => WhenOptionUnsupportedByProxy::Forward,
    }
  }

  /// Whether or not different values for this option should
  /// yield proxies' cached response
  ///
  /// _(when the proxy does not support processing it and
  /// the option is safe to forward)_
  pub fn when_option_changes(&self) -> WhenOptionChanges {
    match (self.0 & 0b11100) >> 2 {
      | 0b111 => WhenOptionChanges::ResponseDoesNotChange,
      | _ => WhenOptionChanges::ResponseChanges,
    }
  }
}

#[doc = rfc_7252_doc!("3.2")]
#[derive(Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct OptValue(pub Vec<u8>);

impl OptValue {
  /// Borrow the raw value bytes
  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  /// Interpret the value as an RFC7252 `uint`
  /// (big-endian, leading zeroes optional, empty means `0`).
  ///
  /// Yields `None` for values longer than 4 bytes.
  ///
  /// ```
  /// use coap_packet::OptValue;
  ///
  /// assert_eq!(OptValue(vec![]).as_uint(), Some(0));
  /// assert_eq!(OptValue(vec![1, 0]).as_uint(), Some(256));
  /// assert_eq!(OptValue(vec![0; 5]).as_uint(), None);
  /// ```
  pub fn as_uint(&self) -> Option<u32> {
    if self.0.len() > 4 {
      None
    } else {
      Some(self.0.iter().fold(0u32, |n, b| (n << 8) | *b as u32))
    }
  }

  /// Encode an RFC7252 `uint` in as few bytes as possible
  ///
  /// ```
  /// use coap_packet::OptValue;
  ///
  /// assert_eq!(OptValue::uint(0), OptValue(vec![]));
  /// assert_eq!(OptValue::uint(60), OptValue(vec![60]));
  /// assert_eq!(OptValue::uint(1152), OptValue(vec![4, 128]));
  /// ```
  pub fn uint(n: u32) -> OptValue {
    let bytes = n.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    OptValue(bytes[skip..].to_vec())
  }
}

impl From<Vec<u8>> for OptValue {
  fn from(v: Vec<u8>) -> Self {
    Self(v)
  }
}

impl<'a> From<&'a [u8]> for OptValue {
  fn from(v: &'a [u8]) -> Self {
    Self(v.to_vec())
  }
}

/// The value(s) of one option number.
///
/// An option that occurs once is [`OptValues::Single`]; one that repeats is
/// [`OptValues::Multiple`], in the order the occurrences appear on the wire
/// (or, when building a message, in the order they were added).
#[derive(Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum OptValues {
  /// The option occurs exactly once
  Single(OptValue),
  /// The option repeats
  Multiple(Vec<OptValue>),
}

impl OptValues {
  /// Add another occurrence, turning a `Single` into a `Multiple`.
  ///
  /// ```
  /// use coap_packet::{OptValue, OptValues};
  ///
  /// let mut vals = OptValues::from(OptValue(vec![1]));
  /// vals.push(OptValue(vec![2]));
  /// assert_eq!(vals, OptValues::Multiple(vec![OptValue(vec![1]), OptValue(vec![2])]));
  /// ```
  pub fn push(&mut self, value: OptValue) {
    match self {
      | Self::Multiple(vals) => vals.push(value),
      | Self::Single(first) => {
        let first = core::mem::take(first);
        *self = Self::Multiple(vec![first, value]);
      },
    }
  }

  /// Iterate over every occurrence, in order
  pub fn iter(&self) -> core::slice::Iter<'_, OptValue> {
    match self {
      | Self::Single(val) => core::slice::from_ref(val).iter(),
      | Self::Multiple(vals) => vals.iter(),
    }
  }

  /// The first occurrence, if there is one
  pub fn first(&self) -> Option<&OptValue> {
    self.iter().next()
  }

  /// Number of occurrences
  pub fn len(&self) -> usize {
    match self {
      | Self::Single(_) => 1,
      | Self::Multiple(vals) => vals.len(),
    }
  }

  /// Whether this is a `Multiple` with nothing in it
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Flatten into a list of occurrences
  pub fn into_vec(self) -> Vec<OptValue> {
    match self {
      | Self::Single(val) => vec![val],
      | Self::Multiple(vals) => vals,
    }
  }
}

impl From<OptValue> for OptValues {
  fn from(v: OptValue) -> Self {
    Self::Single(v)
  }
}

impl From<Vec<OptValue>> for OptValues {
  fn from(vs: Vec<OptValue>) -> Self {
    Self::Multiple(vs)
  }
}

impl<'a> IntoIterator for &'a OptValues {
  type Item = &'a OptValue;
  type IntoIter = core::slice::Iter<'a, OptValue>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// The options of a message, keyed (and therefore ordered) by number
pub type OptionMap = BTreeMap<OptNumber, OptValues>;

/// Add an occurrence of option `number` to a map
pub(crate) fn insert_opt(opts: &mut OptionMap, number: OptNumber, value: OptValue) {
  match opts.get_mut(&number) {
    | Some(vals) => vals.push(value),
    | None => {
      opts.insert(number, OptValues::Single(value));
    },
  }
}

/// Iterate over every `(number, value)` occurrence in ascending number order
pub(crate) fn flatten_opts(opts: &OptionMap) -> impl Iterator<Item = (OptNumber, &OptValue)> {
  opts.iter()
      .flat_map(|(number, vals)| vals.iter().map(move |v| (*number, v)))
}

impl<Bytes: AsRef<[u8]>> TryConsumeBytes<Bytes> for OptionMap {
  type Error = OptParseError;

  fn try_consume_bytes(bytes: &mut Cursor<Bytes>) -> Result<Self, Self::Error> {
    let mut opts = OptionMap::new();
    let mut number = OptNumber(0);

    while let Some((n, value)) = try_consume_opt(bytes, number)? {
      insert_opt(&mut opts, n, OptValue::from(value));
      number = n;
    }

    Ok(opts)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn consume(bytes: &[u8]) -> Result<OptionMap, OptParseError> {
    OptionMap::try_consume_bytes(&mut Cursor::new(bytes))
  }

  #[test]
  fn parse_opt() {
    let mut opt_bytes = Cursor::new([0b00010001u8, 0b00000001]);
    let (n, v) = try_consume_opt(&mut opt_bytes, OptNumber(0)).unwrap().unwrap();
    assert_eq!(n, OptNumber(1));
    assert_eq!(v, &[1]);

    let mut opt_bytes = Cursor::new([0b11010001u8, 0b00000001, 0b00000001]);
    let (n, v) = try_consume_opt(&mut opt_bytes, OptNumber(0)).unwrap().unwrap();
    assert_eq!(n, OptNumber(14));
    assert_eq!(v, &[1]);

    let mut opt_bytes = Cursor::new([0b11100001u8, 0b00000000, 0b00000001, 0b00000001]);
    let (n, v) = try_consume_opt(&mut opt_bytes, OptNumber(0)).unwrap().unwrap();
    assert_eq!(n, OptNumber(270));
    assert_eq!(v, &[1]);

    let mut opt_bytes = Cursor::new([0b00000001u8, 0b00000001]);
    let (n, v) = try_consume_opt(&mut opt_bytes, OptNumber(3)).unwrap().unwrap();
    assert_eq!(n, OptNumber(3));
    assert_eq!(v, &[1]);
  }

  #[test]
  fn stops_at_marker_or_end() {
    let mut opt_bytes = Cursor::new([0b11111111u8, 1, 2]);
    assert_eq!(try_consume_opt(&mut opt_bytes, OptNumber(0)), Ok(None));
    assert_eq!(opt_bytes.position(), 0);

    let mut opt_bytes = Cursor::new([0u8; 0]);
    assert_eq!(try_consume_opt(&mut opt_bytes, OptNumber(0)), Ok(None));
  }

  #[test]
  fn control_byte_b1() {
    assert_eq!(consume(&[0xB1, 0x00]).unwrap(),
               OptionMap::from([(OptNumber(11), OptValues::Single(OptValue(vec![0])))]));
  }

  #[test]
  fn repeated_numbers_become_multiple() {
    let bytes = [0b1011_0001, b'a', 0b0000_0001, b'b', 0b0001_0000, 0b0000_0000];
    let opts = consume(&bytes).unwrap();

    assert_eq!(opts.get(&OptNumber(11)),
               Some(&OptValues::Multiple(vec![OptValue(b"a".to_vec()), OptValue(b"b".to_vec())])));
    assert_eq!(opts.get(&OptNumber(12)),
               Some(&OptValues::Multiple(vec![OptValue(vec![]), OptValue(vec![])])));
  }

  #[test]
  fn reserved_nibbles() {
    assert_eq!(consume(&[0b1111_0000]),
               Err(OptParseError::OptionDeltaReservedValue(15)));
    assert_eq!(consume(&[0b0001_1111]),
               Err(OptParseError::ValueLengthReservedValue(15)));
  }

  #[test]
  fn missing_extension_bytes() {
    assert_eq!(consume(&[0b1101_0000]), Err(OptParseError::UnexpectedEndOfStream));
    assert_eq!(consume(&[0b1110_0000, 0]), Err(OptParseError::UnexpectedEndOfStream));
    assert_eq!(consume(&[0b0000_1101]), Err(OptParseError::UnexpectedEndOfStream));
  }

  #[test]
  fn value_past_end() {
    assert_eq!(consume(&[0b0001_0011, 1, 2]),
               Err(OptParseError::ValueTooBig { len: 3,
                                                remaining: 2 }));
    assert_eq!(consume(&[0b0001_1101, 0]),
               Err(OptParseError::ValueTooBig { len: 13,
                                                remaining: 0 }));
  }

  #[test]
  fn number_overflow() {
    let bytes = [0b1110_0000, 0xFF, 0xFF, 0b1110_0000, 0xFF, 0xFF];
    assert_eq!(consume(&bytes),
               Err(OptParseError::NumberOverflow(65804)));
  }

  #[test]
  fn write_opt_ext() {
    use core::iter::repeat;
    let cases: [(u16, Vec<u8>, Vec<u8>); 4] =
      [(24,
        repeat(1).take(100).collect(),
        [&[0b1101_1101u8, 24 - 13, 100 - 13][..],
         &repeat(1).take(100).collect::<Vec<u8>>()[..]].concat()),
       (1, vec![1], vec![0b0001_0001, 1]),
       (24, vec![1], vec![0b1101_0001, 11, 1]),
       (24,
        repeat(1).take(300).collect(),
        [&[0b1101_1110u8, 24 - 13][..],
         &(300u16 - 269).to_be_bytes()[..],
         &repeat(1).take(300).collect::<Vec<u8>>()[..]].concat())];

    cases.into_iter().for_each(|(delta, value, expected)| {
                       let mut actual = BoundedBuf::new(1024);
                       write_opt(delta, &value, &mut actual).unwrap();
                       crate::assert_eqb_iter!(actual.as_slice(), expected)
                     });

    let boundaries: [(u16, u8, &[u8]); 7] = [(12, 12, &[]),
                                             (13, 13, &[0]),
                                             (255, 13, &[242]),
                                             (256, 13, &[243]),
                                             (268, 13, &[255]),
                                             (269, 14, &[0, 0]),
                                             (65535, 14, &[0xFE, 0xF2])];

    boundaries.into_iter().for_each(|(n, nibble, ext)| {
                            let value = vec![1u8; n as usize];
                            let mut actual = BoundedBuf::new(usize::MAX);
                            write_opt(n, &value, &mut actual).unwrap();

                            let expected_head = [&[nibble << 4 | nibble][..], ext, ext].concat();
                            assert_eq!(&actual.as_slice()[..expected_head.len()],
                                       &expected_head[..],
                                       "{}",
                                       n);

                            let mut cursor = Cursor::new(actual.as_slice());
                            let (number, parsed) =
                              try_consume_opt(&mut cursor, OptNumber(0)).unwrap().unwrap();
                            assert_eq!(number, OptNumber(n));
                            assert_eq!(parsed, &value[..]);
                          });
  }

  #[test]
  fn len_or_delta_boundaries() {
    let nibble = |n: u16| opt_len_or_delta(n).0;
    let ext = |n: u16| opt_len_or_delta(n).1.map(|a| a.to_vec());

    assert_eq!((nibble(12), ext(12)), (12, None));
    assert_eq!((nibble(13), ext(13)), (13, Some(vec![0])));
    assert_eq!((nibble(256), ext(256)), (13, Some(vec![243])));
    assert_eq!((nibble(268), ext(268)), (13, Some(vec![255])));
    assert_eq!((nibble(269), ext(269)), (14, Some(vec![0, 0])));
    assert_eq!((nibble(65535), ext(65535)), (14, Some(vec![0xFE, 0xF2])));
  }

  #[test]
  fn write_opts_rejects_long_values() {
    let value = OptValue(vec![0; MAX_OPT_VALUE_LEN + 1]);
    let mut buf = BoundedBuf::new(usize::MAX);
    assert_eq!(write_opts([(OptNumber(1), &value)], &mut buf),
               Err(MessageToBytesError::BadOption { number: OptNumber(1),
                                                    reason:
                                                      OptEncodeError::ValueTooLong(MAX_OPT_VALUE_LEN
                                                                                   + 1) }));
    assert!(buf.is_empty());
  }

  #[test]
  fn repeats_hold_at_least_two() {
    let mut opts = OptionMap::new();
    insert_opt(&mut opts, OptNumber(11), OptValue(vec![1]));
    insert_opt(&mut opts, OptNumber(11), OptValue(vec![2]));
    opts.insert(OptNumber(12), OptValues::Single(OptValue(vec![])));
    assert_eq!(check_repeats(&opts), Ok(()));

    opts.insert(OptNumber(15), OptValues::Multiple(vec![]));
    assert_eq!(check_repeats(&opts),
               Err(MessageToBytesError::BadOption { number: OptNumber(15),
                                                    reason: OptEncodeError::NotRepeated(0) }));
  }

  #[test]
  fn opt_header_sizes() {
    assert_eq!(opt_header_size(0, 0), 1);
    assert_eq!(opt_header_size(13, 12), 2);
    assert_eq!(opt_header_size(269, 13), 4);
    assert_eq!(opt_header_size(300, 300), 5);
  }

  #[test]
  fn opt_number_qualities() {
    // critical, safe-to-fwd, cache-key
    let if_match = OptNumber(1);

    // critical, unsafe-to-fwd, cache-key
    let uri_host = OptNumber(3);

    // elective, safe-to-fwd, cache-key
    let etag = OptNumber(4);

    // elective, safe-to-fwd, no-cache-key
    let size1 = OptNumber(60);

    [&if_match, &uri_host].into_iter()
                          .for_each(|num| {
                            assert_eq!(num.must_be_processed(), OptionMustBeProcessed::Yes);
                          });

    [&etag, &size1].into_iter().for_each(|num| {
                                 assert_eq!(num.must_be_processed(), OptionMustBeProcessed::No);
                               });

    [&if_match, &etag, &size1].into_iter().for_each(|num| {
                                            assert_eq!(num.when_unsupported_by_proxy(),
                                                       WhenOptionUnsupportedByProxy::Forward);
                                          });

    assert_eq!(uri_host.when_unsupported_by_proxy(),
               WhenOptionUnsupportedByProxy::Error);

    [&if_match, &uri_host, &etag].into_iter().for_each(|num| {
                                               assert_eq!(num.when_option_changes(),
                                                          WhenOptionChanges::ResponseChanges);
                                             });

    assert_eq!(size1.when_option_changes(),
               WhenOptionChanges::ResponseDoesNotChange);
  }
}
