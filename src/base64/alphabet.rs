//! Provides the two base64 [Alphabet]s: [STANDARD] and [URL_SAFE].

use core::fmt;

/// Marks bytes that aren't symbols of an alphabet in a [Alphabet::decode_table].
pub(crate) const INVALID_VALUE: u8 = 255;

/// An alphabet defines the 64 ASCII characters (symbols) used for base64.
///
/// A symbol's position in the alphabet is the 6-bit value it encodes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 64],
}

impl Alphabet {
    /// Performs no checks so that it can be const.
    /// Used only for known-valid strings.
    const fn from_str_unchecked(alphabet: &str) -> Self {
        let mut symbols = [0_u8; 64];
        let source_bytes = alphabet.as_bytes();

        // a way to copy that's allowed in const fn
        let mut index = 0;
        while index < 64 {
            symbols[index] = source_bytes[index];
            index += 1;
        }

        Self { symbols }
    }

    /// The symbols of this alphabet, in value order.
    pub fn as_str(&self) -> &str {
        // only ever built from ASCII `&str`s
        core::str::from_utf8(&self.symbols).unwrap_or_default()
    }

    /// Returns a table mapping a 6-bit value to its symbol.
    pub(crate) const fn encode_table(&self) -> [u8; 64] {
        self.symbols
    }

    /// Returns a table mapping every byte either to the 6-bit value it encodes, or to
    /// [INVALID_VALUE] for bytes that aren't members of the alphabet.
    pub(crate) const fn decode_table(&self) -> [u8; 256] {
        let mut decode_table = [INVALID_VALUE; 256];

        // Since the table is full of `INVALID_VALUE` already, we only need to overwrite
        // the parts that are valid.
        let mut index = 0;
        while index < 64 {
            // The index in the alphabet is the 6-bit value we care about.
            // Since the index is in 0-63, it is safe to cast to u8.
            decode_table[self.symbols[index] as usize] = index as u8;
            index += 1;
        }

        decode_table
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.as_str()).finish()
    }
}

/// The standard alphabet (uses `+` and `/`).
///
/// See [RFC 4648](https://tools.ietf.org/html/rfc4648#section-4).
pub const STANDARD: Alphabet =
    Alphabet::from_str_unchecked("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");

/// The URL safe alphabet (uses `-` and `_`).
///
/// See [RFC 4648](https://tools.ietf.org/html/rfc4648#section-5).
pub const URL_SAFE: Alphabet =
    Alphabet::from_str_unchecked("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");
