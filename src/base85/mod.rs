//! Base85 over any 85-symbol [Alphabet].
//!
//! Each group of 4 bytes is read as a big-endian `u32` and written as 5 base-85 digits, most
//! significant first. A trailing group of 1 to 3 bytes is padded with zero bytes, encoded, and
//! truncated to one more digit than it had bytes. When decoding, the missing digits of a short
//! group are filled in with the highest digit, 84, which recovers the original bytes exactly.
//!
//! There is no padding symbol and no special-case abbreviation (like Adobe's `z` for a group of
//! zero bytes); every group is spelled out.
//!
//! ```
//! use bin2text::base85::{self, ASCII85};
//!
//! let mut buf = [0_u8; 6];
//! let written = base85::encode(&ASCII85, "Man ", &mut buf);
//! assert_eq!(b"9jqo^", &buf[..written]);
//!
//! let mut decoded = [0_u8; 4];
//! assert_eq!(Ok(4), base85::decode(&ASCII85, "9jqo^", &mut decoded));
//! assert_eq!(b"Man ", &decoded);
//! ```

pub mod alphabet;

mod decode;
mod encode;


pub use self::alphabet::{Alphabet, AlphabetError, ASCII85, Z85};
pub use self::decode::{decode, decoded_len};
pub use self::encode::{encode, encoded_len};

/// Bytes in a complete group of decoded data
const DECODED_GROUP_LEN: usize = 4;
/// Symbols in a complete group of encoded data
const ENCODED_GROUP_LEN: usize = 5;
