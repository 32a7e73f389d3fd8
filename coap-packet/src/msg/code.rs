use core::fmt;

use toad_macros::rfc_7252_doc;

/// Whether a [`Code`] belongs to a request, a response, or an empty message
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CodeKind {
  /// `0.00`; used by pings, bare ACKs and resets
  Empty,
  /// Class `0` with a nonzero detail (a method)
  Request,
  /// Any code with a class greater than `0`
  Response,
}

#[doc = rfc_7252_doc!("12.1")]
/// <details><summary><b>RFC7252 Section 12.1.1 Method Codes</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("12.1.1"))]
/// </details>
/// <details><summary><b>RFC7252 Section 12.1.2 Response Codes</b></summary>
#[doc = concat!("\n#", rfc_7252_doc!("12.1.2"))]
/// </details>
///
/// # Examples
/// ```
/// use coap_packet::Code;
/// assert_eq!(Code { class: 2, detail: 5 }.to_string(), "2.05".to_string())
/// ```
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
pub struct Code {
  /// The "class" of message codes identify it as a request or response, and provides the class of response status:
  ///
  /// |class|meaning|
  /// |---|---|
  /// |`0`|Message is a request|
  /// |`2`|Message is a success response|
  /// |`4`|Message is a client error response|
  /// |`5`|Message is a server error response|
  pub class: u8,

  /// 2-digit integer (range `[0, 32)`) that provides granular information about the response status.
  ///
  /// Will always be `0` for requests.
  pub detail: u8,
}

impl Code {
  /// `0.00`
  pub const EMPTY: Code = Code::new(0, 0);
  /// `0.01`
  pub const GET: Code = Code::new(0, 1);
  /// `0.02`
  pub const POST: Code = Code::new(0, 2);
  /// `0.03`
  pub const PUT: Code = Code::new(0, 3);
  /// `0.04`
  pub const DELETE: Code = Code::new(0, 4);
  /// `2.05`
  pub const CONTENT: Code = Code::new(2, 5);

  /// Create a new Code
  ///
  /// ```
  /// use coap_packet::Code;
  ///
  /// let content = Code::new(2, 05);
  /// ```
  pub const fn new(class: u8, detail: u8) -> Self {
    Self { class, detail }
  }

  /// Classify this code as belonging to a request, a response or an empty message
  ///
  /// ```
  /// use coap_packet::{Code, CodeKind};
  ///
  /// assert_eq!(Code::GET.kind(), CodeKind::Request);
  /// assert_eq!(Code::CONTENT.kind(), CodeKind::Response);
  /// assert_eq!(Code::EMPTY.kind(), CodeKind::Empty);
  /// ```
  pub fn kind(&self) -> CodeKind {
    match (self.class, self.detail) {
      | (0, 0) => CodeKind::Empty,
      | (0, _) => CodeKind::Request,
      | _ => CodeKind::Response,
    }
  }

  /// Build a code from its HTTP-looking decimal rendering,
  /// e.g. `205` for `2.05 Content`.
  ///
  /// Yields `None` when the class does not fit in 3 bits or the
  /// detail in 5 bits.
  ///
  /// ```
  /// use coap_packet::Code;
  ///
  /// assert_eq!(Code::from_http(205), Some(Code::CONTENT));
  /// assert_eq!(Code::from_http(404), Some(Code::new(4, 4)));
  /// assert_eq!(Code::from_http(232), None);
  /// ```
  pub fn from_http(n: u16) -> Option<Code> {
    let (class, detail) = (n / 100, n % 100);
    if class > 0b111 || detail > 0b11111 {
      None
    } else {
      Some(Code::new(class as u8, detail as u8))
    }
  }

  /// Inverse of [`Code::from_http`]
  ///
  /// ```
  /// use coap_packet::Code;
  ///
  /// assert_eq!(Code::CONTENT.to_http(), 205);
  /// ```
  pub fn to_http(&self) -> u16 {
    (self.class as u16) * 100 + self.detail as u16
  }

  /// Get the human string representation of a message code
  ///
  /// # Returns
  /// A `char` array
  ///
  /// This is to avoid unnecessary heap allocation,
  /// you can create a `String` with `FromIterator::<String>::from_iter`,
  /// or use the [`Display`](core::fmt::Display) implementation.
  /// ```
  /// use coap_packet::Code;
  ///
  /// let code = Code { class: 2, detail: 5 };
  /// let chars = code.to_human();
  /// let string = String::from_iter(chars);
  /// assert_eq!(string, "2.05".to_string());
  /// ```
  pub fn to_human(&self) -> [char; 4] {
    let to_char = |d: u8| (b'0' + d % 10) as char;
    [to_char(self.class),
     '.',
     to_char(self.detail / 10),
     to_char(self.detail % 10)]
  }
}

impl fmt::Display for Code {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.to_human().iter().try_for_each(|c| fmt::Write::write_char(f, *c))
  }
}

impl From<u8> for Code {
  fn from(b: u8) -> Self {
    let class = b >> 5;
    let detail = b & 0b0011111;

    Code { class, detail }
  }
}

impl From<Code> for u8 {
  fn from(code: Code) -> u8 {
    let class = code.class << 5;
    let detail = code.detail & 0b0011111;

    class | detail
  }
}
