/// Version of the CoAP protocol that the message adheres to.
///
/// RFC7252 only defines version 1; datagrams carrying any other
/// version are rejected while decoding.
///
/// See [RFC7252 - Message Details](https://datatracker.ietf.org/doc/html/rfc7252#section-3) for context
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Version(pub u8);

impl Version {
  /// The only version defined by RFC7252
  pub const V1: Version = Version(1);
}

impl Default for Version {
  fn default() -> Self {
    Version::V1
  }
}
