/// Largest message [`Config::default`] will produce.
///
/// RFC7252 Section 4.6 recommends that messages fit in a single IP packet;
/// 1152 bytes is the upper bound it suggests when the path MTU is unknown.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 1152;

/// Limits applied when serializing a [`Packet`](crate::Packet)
///
/// ```
/// use coap_packet::config::Config;
/// use coap_packet::{MessageToBytesError, Packet, Payload};
///
/// let msg = Packet { payload: Some(Payload(vec![0; 2048])),
///                    ..Default::default() };
///
/// assert!(matches!(msg.to_bytes(),
///                  Err(MessageToBytesError::BufferOverflow { .. })));
///
/// let jumbo = Config { max_message_size: 4096 };
/// assert_eq!(msg.to_bytes_with(&jumbo).unwrap().len(), 2053);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Config {
  /// Serializing a message any larger than this fails
  /// with [`MessageToBytesError::BufferOverflow`](crate::MessageToBytesError::BufferOverflow).
  ///
  /// Values above 65535 behave as 65535.
  pub max_message_size: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self { max_message_size: DEFAULT_MAX_MESSAGE_SIZE }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default() {
    assert_eq!(Config::default().max_message_size, 1152);
  }
}
