//! Allocation-free binary-to-text codecs writing into caller-owned, fixed-capacity buffers.
//!
//! Two independent families are provided:
//!
//! - [base64]: the standard alphabet (`+`, `/`, with `=` padding) and the URL-safe alphabet
//!   (`-`, `_`, without padding), selected at compile time through a [base64::Variant] type or
//!   at runtime through [base64::Mode].
//! - [base85]: encoding and decoding over any caller-supplied 85-symbol [base85::Alphabet], with
//!   [base85::ASCII85] and [base85::Z85] available as constants.
//!
//! Nothing in this crate allocates. Every operation takes an input slice and, where output is
//! produced, an output slice whose length is the available capacity.
//!
//! # Encoding
//!
//! Encoding never fails. If the output buffer cannot hold the encoded symbols plus one trailing
//! NUL byte, nothing is written and the number of symbols that *would* have been written is
//! returned instead, so a caller can measure with an empty buffer and then encode for real.
//!
//! ```
//! use bin2text::base64::{self, Standard};
//!
//! let required = base64::encode::<Standard, _>(b"Man", &mut [0_u8; 0]);
//! assert_eq!(4, required);
//!
//! let mut buf = [0_u8; 5];
//! let written = base64::encode::<Standard, _>(b"Man", &mut buf);
//! assert_eq!(b"TWFu\0", &buf[..=written]);
//! ```
//!
//! # Decoding
//!
//! Decoding is strict: malformed input is rejected with a [DecodeError] and never repaired.
//! Running out of output capacity is an error too ([DecodeError::BufferTooSmall]).
//!
//! ```
//! use bin2text::{base64::Mode, DecodeError};
//!
//! let mut buf = [0_u8; 3];
//! assert_eq!(Ok(3), Mode::Standard.decode("TWFu", &mut buf));
//! assert_eq!(b"Man", &buf);
//!
//! assert_eq!(Err(DecodeError::InvalidLength), Mode::Standard.decode("QQ=", &mut buf));
//! assert_eq!(
//!     Err(DecodeError::InvalidCharacter(1, b'!')),
//!     Mode::Standard.decode("Q!==", &mut buf)
//! );
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![forbid(unsafe_code)]

pub mod base64;
pub mod base85;

mod error;
mod output;


// the template macros refer to it through the crate root
#[cfg(test)]
use rstest_reuse;

pub use crate::error::DecodeError;

/// Written after the last encoded symbol when the output buffer has room for it.
pub const NUL_BYTE: u8 = 0;
