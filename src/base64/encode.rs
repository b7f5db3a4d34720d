use super::{Variant, PAD_BYTE};
use crate::NUL_BYTE;

/// Calculate the base64 encoded length for a given input length, including padding for variants
/// that use it.
///
/// Returns `None` if the encoded length can't be represented in `usize`. This will happen for
/// input lengths in approximately the top quarter of the range of `usize`.
///
/// ```
/// use bin2text::base64::{encoded_len, Standard, UrlSafe};
///
/// assert_eq!(Some(4), encoded_len::<Standard>(1));
/// assert_eq!(Some(2), encoded_len::<UrlSafe>(1));
/// ```
pub fn encoded_len<V: Variant>(input_len: usize) -> Option<usize> {
    let complete_chunk_output = (input_len / 3).checked_mul(4);

    match input_len % 3 {
        0 => complete_chunk_output,
        rem => {
            let encoded_rem = if V::PADDING { 4 } else { rem + 1 };
            complete_chunk_output.and_then(|c| c.checked_add(encoded_rem))
        }
    }
}

/// Encode arbitrary octets as base64 into `output`, followed by a NUL byte.
///
/// Returns the number of symbols written, not counting the NUL.
///
/// `output` must have room for the [encoded_len] plus one for the NUL. If it doesn't, nothing is
/// written and the encoded length is returned anyway, so that a caller can tell that
/// `output` was too small by checking if the returned length is `>= output.len()`. Encoding
/// into an empty slice is thus a way to measure.
///
/// ```
/// use bin2text::base64::{self, Standard};
///
/// let mut small = [0_u8; 4];
/// assert_eq!(4, base64::encode::<Standard, _>("Man", &mut small));
/// assert_eq!([0; 4], small);
///
/// let mut buf = [0_u8; 5];
/// assert_eq!(4, base64::encode::<Standard, _>("Man", &mut buf));
/// assert_eq!(b"TWFu\0", &buf);
/// ```
pub fn encode<V: Variant, T: ?Sized + AsRef<[u8]>>(input: &T, output: &mut [u8]) -> usize {
    let input_bytes = input.as_ref();

    let encoded_size = match encoded_len::<V>(input_bytes.len()) {
        Some(size) => size,
        // no slice could ever be that long
        None => return usize::MAX,
    };

    // leave a spare byte for the NUL
    if encoded_size >= output.len() {
        return encoded_size;
    }

    let b64_bytes_written = encode_to_slice(input_bytes, output, V::encode_table());

    let padding_bytes = if V::PADDING {
        add_padding(input_bytes.len(), &mut output[b64_bytes_written..])
    } else {
        0
    };

    let encoded_bytes = b64_bytes_written + padding_bytes;
    debug_assert_eq!(encoded_size, encoded_bytes);

    output[encoded_bytes] = NUL_BYTE;

    encoded_bytes
}

/// Encode input bytes to base64 symbols. Does not pad.
/// `output` must be long enough to hold the encoded `input` without padding.
/// Returns the number of bytes written.
fn encode_to_slice(input: &[u8], output: &mut [u8], encode_table: &[u8; 64]) -> usize {
    const LOW_SIX_BITS: u8 = 0x3F;

    let mut output_index = 0;
    let mut chunks = input.chunks_exact(3);

    for chunk in &mut chunks {
        let output_chunk = &mut output[output_index..(output_index + 4)];

        output_chunk[0] = encode_table[(chunk[0] >> 2) as usize];
        output_chunk[1] = encode_table[((chunk[0] << 4 | chunk[1] >> 4) & LOW_SIX_BITS) as usize];
        output_chunk[2] = encode_table[((chunk[1] << 2 | chunk[2] >> 6) & LOW_SIX_BITS) as usize];
        output_chunk[3] = encode_table[(chunk[2] & LOW_SIX_BITS) as usize];

        output_index += 4;
    }

    // the low bits of the last symbol are zero
    match *chunks.remainder() {
        [first, second] => {
            output[output_index] = encode_table[(first >> 2) as usize];
            output[output_index + 1] =
                encode_table[((first << 4 | second >> 4) & LOW_SIX_BITS) as usize];
            output[output_index + 2] = encode_table[((second << 2) & LOW_SIX_BITS) as usize];
            output_index += 3;
        }
        [only] => {
            output[output_index] = encode_table[(only >> 2) as usize];
            output[output_index + 1] = encode_table[((only << 4) & LOW_SIX_BITS) as usize];
            output_index += 2;
        }
        _ => {}
    }

    output_index
}

/// Write padding characters.
/// `output` is the slice where padding should be written, with room for the padding (at most 2
/// bytes).
///
/// Returns the number of padding bytes written.
fn add_padding(input_len: usize, output: &mut [u8]) -> usize {
    let padding_len = (3 - input_len % 3) % 3;

    output[..padding_len].fill(PAD_BYTE);

    padding_len
}
