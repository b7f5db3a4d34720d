//! Base64 in two flavors: [Standard] (`+`, `/`, padded with `=`) and [UrlSafe] (`-`, `_`,
//! unpadded).
//!
//! The flavor is picked either at compile time, by naming a [Variant] type parameter, or at
//! runtime, by calling methods on a [Mode]. Both routes run the same code.
//!
//! ```
//! use bin2text::base64::{self, Mode, UrlSafe};
//!
//! let mut buf = [0_u8; 8];
//!
//! let written = base64::encode::<UrlSafe, _>(&[0xFB_u8, 0xFF], &mut buf);
//! assert_eq!(b"-_8", &buf[..written]);
//!
//! let written = Mode::Standard.encode(&[0xFB_u8, 0xFF], &mut buf);
//! assert_eq!(b"+/8=", &buf[..written]);
//! ```

pub mod alphabet;

mod decode;
mod encode;


pub use self::decode::{decode, decoded_len};
pub use self::encode::{encode, encoded_len};

use crate::DecodeError;
use alphabet::Alphabet;

/// The byte used to pad [Standard] output to a multiple of 4 symbols.
pub const PAD_BYTE: u8 = b'=';

static STANDARD_ENCODE: [u8; 64] = alphabet::STANDARD.encode_table();
static STANDARD_DECODE: [u8; 256] = alphabet::STANDARD.decode_table();
static URL_SAFE_ENCODE: [u8; 64] = alphabet::URL_SAFE.encode_table();
static URL_SAFE_DECODE: [u8; 256] = alphabet::URL_SAFE.decode_table();

mod private {
    pub trait Sealed {
        fn encode_table() -> &'static [u8; 64];
        fn decode_table() -> &'static [u8; 256];
    }
}

/// A compile-time selection of base64 alphabet and padding.
///
/// This trait is sealed: the only implementations are [Standard] and [UrlSafe].
pub trait Variant: private::Sealed {
    /// The symbols used by this variant.
    const ALPHABET: &'static Alphabet;
    /// `true` if encoded output is padded with [PAD_BYTE] to a multiple of 4 symbols, and
    /// decoded input must be as well.
    const PADDING: bool;
}

/// Standard base64: the [alphabet::STANDARD] alphabet, with padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Standard;

impl private::Sealed for Standard {
    #[inline]
    fn encode_table() -> &'static [u8; 64] {
        &STANDARD_ENCODE
    }

    #[inline]
    fn decode_table() -> &'static [u8; 256] {
        &STANDARD_DECODE
    }
}

impl Variant for Standard {
    const ALPHABET: &'static Alphabet = &alphabet::STANDARD;
    const PADDING: bool = true;
}

/// URL-safe base64: the [alphabet::URL_SAFE] alphabet, without padding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UrlSafe;

impl private::Sealed for UrlSafe {
    #[inline]
    fn encode_table() -> &'static [u8; 64] {
        &URL_SAFE_ENCODE
    }

    #[inline]
    fn decode_table() -> &'static [u8; 256] {
        &URL_SAFE_DECODE
    }
}

impl Variant for UrlSafe {
    const ALPHABET: &'static Alphabet = &alphabet::URL_SAFE;
    const PADDING: bool = false;
}

/// A runtime selection of base64 variant.
///
/// Each method forwards to the generic function of the same name with the matching [Variant].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// See [Standard].
    #[default]
    Standard,
    /// See [UrlSafe].
    UrlSafe,
}

impl Mode {
    /// Returns `true` if this mode pads with [PAD_BYTE].
    pub const fn has_padding(self) -> bool {
        match self {
            Mode::Standard => Standard::PADDING,
            Mode::UrlSafe => UrlSafe::PADDING,
        }
    }

    /// The symbols used by this mode.
    pub const fn alphabet(self) -> &'static Alphabet {
        match self {
            Mode::Standard => Standard::ALPHABET,
            Mode::UrlSafe => UrlSafe::ALPHABET,
        }
    }

    /// See [encoded_len()].
    pub fn encoded_len(self, input_len: usize) -> Option<usize> {
        match self {
            Mode::Standard => encoded_len::<Standard>(input_len),
            Mode::UrlSafe => encoded_len::<UrlSafe>(input_len),
        }
    }

    /// See [encode()].
    pub fn encode<T: ?Sized + AsRef<[u8]>>(self, input: &T, output: &mut [u8]) -> usize {
        match self {
            Mode::Standard => encode::<Standard, T>(input, output),
            Mode::UrlSafe => encode::<UrlSafe, T>(input, output),
        }
    }

    /// See [decoded_len()].
    pub fn decoded_len<T: ?Sized + AsRef<[u8]>>(self, input: &T) -> Result<usize, DecodeError> {
        match self {
            Mode::Standard => decoded_len::<Standard, T>(input),
            Mode::UrlSafe => decoded_len::<UrlSafe, T>(input),
        }
    }

    /// See [decode()].
    pub fn decode<T: ?Sized + AsRef<[u8]>>(
        self,
        input: &T,
        output: &mut [u8],
    ) -> Result<usize, DecodeError> {
        match self {
            Mode::Standard => decode::<Standard, T>(input, output),
            Mode::UrlSafe => decode::<UrlSafe, T>(input, output),
        }
    }
}
