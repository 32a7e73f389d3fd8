//! Common structs and abstractions used by `coap-packet`

#![cfg_attr(not(test), forbid(missing_debug_implementations, unreachable_pub))]
#![cfg_attr(not(test), deny(unsafe_code))]
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc as std_alloc;

/// Cursor
pub mod cursor;
pub use cursor::*;

/// Bounded buffer
#[cfg(feature = "alloc")]
pub mod bounded;
#[cfg(feature = "alloc")]
pub use bounded::*;
