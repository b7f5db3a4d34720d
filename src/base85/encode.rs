use super::{Alphabet, DECODED_GROUP_LEN, ENCODED_GROUP_LEN};
use crate::NUL_BYTE;

/// Calculate the base85 encoded length for a given input length.
///
/// Every complete group of 4 bytes takes 5 symbols, and a trailing group of 1 to 3 bytes takes
/// one symbol more than it has bytes.
///
/// Returns `None` if the encoded length can't be represented in `usize`.
///
/// ```
/// assert_eq!(Some(5), bin2text::base85::encoded_len(4));
/// assert_eq!(Some(7), bin2text::base85::encoded_len(5));
/// ```
pub fn encoded_len(input_len: usize) -> Option<usize> {
    let complete_chunk_output = (input_len / DECODED_GROUP_LEN).checked_mul(ENCODED_GROUP_LEN);

    match input_len % DECODED_GROUP_LEN {
        0 => complete_chunk_output,
        rem => complete_chunk_output.and_then(|c| c.checked_add(rem + 1)),
    }
}

/// Encode arbitrary octets as base85 with `alphabet` into `output`, followed by a NUL byte.
///
/// Returns the number of symbols written, not counting the NUL.
///
/// This follows the same rules as [crate::base64::encode()]: if `output` isn't long enough for
/// the [encoded_len] plus the NUL, nothing is written and the encoded length is returned anyway.
///
/// ```
/// use bin2text::base85::{self, Z85};
///
/// let input = [0x86_u8, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B];
///
/// let required = base85::encode(&Z85, &input, &mut [0_u8; 0]);
/// assert_eq!(10, required);
///
/// let mut buf = [0_u8; 11];
/// assert_eq!(10, base85::encode(&Z85, &input, &mut buf));
/// assert_eq!(b"HelloWorld\0", &buf);
/// ```
pub fn encode<T: ?Sized + AsRef<[u8]>>(alphabet: &Alphabet, input: &T, output: &mut [u8]) -> usize {
    let input_bytes = input.as_ref();

    let encoded_size = match encoded_len(input_bytes.len()) {
        Some(size) => size,
        // no slice could ever be that long
        None => return usize::MAX,
    };

    // leave a spare byte for the NUL
    if encoded_size >= output.len() {
        return encoded_size;
    }

    let mut output_index = 0;
    let mut chunks = input_bytes.chunks_exact(DECODED_GROUP_LEN);

    for chunk in &mut chunks {
        let value = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let output_chunk = &mut output[output_index..(output_index + ENCODED_GROUP_LEN)];
        encode_group(alphabet, value, output_chunk);

        output_index += ENCODED_GROUP_LEN;
    }

    let rem = chunks.remainder();
    if !rem.is_empty() {
        // pad with zero bytes, then keep only the digits that the real bytes influence
        let mut padded = [0_u8; DECODED_GROUP_LEN];
        padded[..rem.len()].copy_from_slice(rem);

        let mut digits = [0_u8; ENCODED_GROUP_LEN];
        encode_group(alphabet, u32::from_be_bytes(padded), &mut digits);

        let digits_len = rem.len() + 1;
        output[output_index..(output_index + digits_len)].copy_from_slice(&digits[..digits_len]);
        output_index += digits_len;
    }

    debug_assert_eq!(encoded_size, output_index);

    output[output_index] = NUL_BYTE;

    output_index
}

/// Write the 5 base-85 digits of `value`, most significant first.
#[inline]
fn encode_group(alphabet: &Alphabet, mut value: u32, output: &mut [u8]) {
    debug_assert_eq!(ENCODED_GROUP_LEN, output.len());

    for symbol in output.iter_mut().rev() {
        *symbol = alphabet.symbol(value % 85);
        value /= 85;
    }
}
