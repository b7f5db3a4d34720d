//! Provides [Alphabet] and constants for base85 alphabets commonly used in the wild.

use core::fmt;
#[cfg(any(feature = "std", test))]
use std::error;

/// Marks bytes that aren't symbols of an alphabet in its decode table.
pub(crate) const INVALID_VALUE: u8 = 255;

const ALPHABET_SIZE: usize = 85;

/// An alphabet defines the 85 ASCII characters (symbols) used for base85.
///
/// A symbol's position in the alphabet is the digit it encodes, from 0 to 84.
///
/// Common alphabets are provided as constants, and custom alphabets can be made via
/// [Alphabet::new], which validates the symbols once so that encoding and decoding don't have to.
///
/// ```
/// use bin2text::base85::{Alphabet, AlphabetError, Z85};
///
/// // Z85 with the last two symbols swapped
/// let custom = Alphabet::new(
///     "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%#$",
/// )
/// .unwrap();
/// assert_ne!(Z85, custom);
///
/// assert_eq!(Err(AlphabetError::InvalidLength(3)), Alphabet::new("abc"));
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; ALPHABET_SIZE],
    decode_table: [u8; 256],
}

impl Alphabet {
    /// Performs no checks so that it can be const.
    /// Used only for known-valid strings.
    const fn from_str_unchecked(alphabet: &str) -> Self {
        let mut symbols = [0_u8; ALPHABET_SIZE];
        let mut decode_table = [INVALID_VALUE; 256];
        let source_bytes = alphabet.as_bytes();

        // a way to copy that's allowed in const fn
        let mut index = 0;
        while index < ALPHABET_SIZE {
            symbols[index] = source_bytes[index];
            // index is at most 84, so it fits
            decode_table[source_bytes[index] as usize] = index as u8;
            index += 1;
        }

        Self {
            symbols,
            decode_table,
        }
    }

    /// Create an `Alphabet` from a string of 85 unique printable ASCII bytes.
    ///
    /// # Errors
    ///
    /// Returns an [AlphabetError] if the string is the wrong length, contains a byte that isn't
    /// printable ASCII, or contains the same byte more than once.
    pub const fn new(alphabet: &str) -> Result<Self, AlphabetError> {
        let bytes = alphabet.as_bytes();
        if bytes.len() != ALPHABET_SIZE {
            return Err(AlphabetError::InvalidLength(bytes.len()));
        }

        let mut index = 0;
        while index < ALPHABET_SIZE {
            let byte = bytes[index];

            // must be ascii printable. 127 (DEL) is commonly considered printable
            // for some reason but clearly unsuitable for base85.
            if !(byte >= 32_u8 && byte < 127_u8) {
                return Err(AlphabetError::UnprintableByte(byte));
            }

            let mut probe_index = index + 1;
            while probe_index < ALPHABET_SIZE {
                if bytes[probe_index] == byte {
                    return Err(AlphabetError::DuplicatedByte(byte));
                }
                probe_index += 1;
            }

            index += 1;
        }

        Ok(Self::from_str_unchecked(alphabet))
    }

    /// The symbols of this alphabet, in digit order.
    pub fn as_str(&self) -> &str {
        // always validated (or known-good) printable ASCII
        core::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    /// The symbol for `digit`, which must be less than 85.
    #[inline]
    pub(crate) fn symbol(&self, digit: u32) -> u8 {
        self.symbols[digit as usize]
    }

    /// The digit for `byte`, or [INVALID_VALUE] if it isn't a symbol.
    #[inline]
    pub(crate) fn digit(&self, byte: u8) -> u8 {
        self.decode_table[byte as usize]
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Possible errors when constructing an [Alphabet] from a `str`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// Alphabets must be 85 bytes long; the provided length is included.
    InvalidLength(usize),
    /// All bytes must be unique
    DuplicatedByte(u8),
    /// All bytes must be printable (in the range `[32, 126]`).
    UnprintableByte(u8),
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::InvalidLength(len) => {
                write!(f, "Invalid length - must be 85 bytes, got {}", len)
            }
            Self::DuplicatedByte(b) => write!(f, "Duplicated byte: {:#04x}", b),
            Self::UnprintableByte(b) => write!(f, "Unprintable byte: {:#04x}", b),
        }
    }
}

#[cfg(any(feature = "std", test))]
impl error::Error for AlphabetError {}

/// The Adobe / btoa alphabet: every byte from `!` to `u`.
pub const ASCII85: Alphabet = Alphabet::from_str_unchecked(
    "!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu",
);

/// The ZeroMQ alphabet, which avoids quote and backslash so it can be embedded in source code.
///
/// See [ZeroMQ RFC 32](https://rfc.zeromq.org/spec/32/).
pub const Z85: Alphabet = Alphabet::from_str_unchecked(
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ.-:+=^!/*?&<>()[]{}@%$#",
);
