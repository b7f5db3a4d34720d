use super::{alphabet::INVALID_VALUE, Alphabet, DECODED_GROUP_LEN, ENCODED_GROUP_LEN};
use crate::{output::SliceWriter, DecodeError};

/// The highest base-85 digit, which stands in for the digits a short group leaves out.
const MAX_DIGIT: u64 = 84;

/// Calculate the exact number of bytes that `input` decodes to, validating it along the way.
///
/// Input one symbol longer than a multiple of 5 is an [DecodeError::InvalidLength], since no
/// number of bytes encodes to that. The length is checked before the content.
///
/// This doesn't detect groups that overflow 32 bits; [decode()] does.
///
/// ```
/// use bin2text::{base85::{decoded_len, ASCII85}, DecodeError};
///
/// assert_eq!(Ok(3), decoded_len(&ASCII85, "9jqo"));
/// assert_eq!(Err(DecodeError::InvalidLength), decoded_len(&ASCII85, "9jqo^9"));
/// assert_eq!(Err(DecodeError::InvalidCharacter(1, b'~')), decoded_len(&ASCII85, "9~"));
/// ```
pub fn decoded_len<T: ?Sized + AsRef<[u8]>>(
    alphabet: &Alphabet,
    input: &T,
) -> Result<usize, DecodeError> {
    let input_bytes = input.as_ref();

    let rem = check_length(input_bytes.len())?;

    if let Some((index, &byte)) = input_bytes
        .iter()
        .enumerate()
        .find(|&(_, &byte)| alphabet.digit(byte) == INVALID_VALUE)
    {
        return Err(DecodeError::InvalidCharacter(index, byte));
    }

    // a trailing partial group of n symbols holds n - 1 bytes
    Ok(input_bytes.len() / ENCODED_GROUP_LEN * DECODED_GROUP_LEN + rem.saturating_sub(1))
}

/// Decode base85 `input` written with `alphabet` into `output`.
///
/// Returns the number of bytes written. Empty input decodes to nothing.
///
/// Besides the checks described for [decoded_len()], a group whose value doesn't fit in a `u32`
/// is rejected with [DecodeError::GroupOverflow]. If `output` fills up,
/// [DecodeError::BufferTooSmall] is returned; the groups decoded before that point will have been
/// written.
///
/// ```
/// use bin2text::{base85::{self, Z85}, DecodeError};
///
/// let mut buf = [0_u8; 8];
/// assert_eq!(Ok(8), base85::decode(&Z85, "HelloWorld", &mut buf));
/// assert_eq!([0x86, 0x4F, 0xD2, 0x6F, 0xB5, 0x59, 0xF7, 0x5B], buf);
///
/// assert_eq!(Err(DecodeError::InvalidLength), base85::decode(&Z85, "Hello!", &mut buf));
/// ```
pub fn decode<T: ?Sized + AsRef<[u8]>>(
    alphabet: &Alphabet,
    input: &T,
    output: &mut [u8],
) -> Result<usize, DecodeError> {
    let input_bytes = input.as_ref();

    check_length(input_bytes.len())?;

    let mut writer = SliceWriter::new(output);
    let mut chunks = input_bytes.chunks_exact(ENCODED_GROUP_LEN);

    for (chunk_index, chunk) in (&mut chunks).enumerate() {
        let value = decode_group(alphabet, chunk, chunk_index * ENCODED_GROUP_LEN)?;
        writer.write(&value.to_be_bytes())?;
    }

    // 2, 3, or 4 symbols hold 1, 2, or 3 bytes
    let suffix = chunks.remainder();
    if !suffix.is_empty() {
        let start_of_suffix = input_bytes.len() - suffix.len();
        let value = decode_group(alphabet, suffix, start_of_suffix)?;
        writer.write(&value.to_be_bytes()[..(suffix.len() - 1)])?;
    }

    Ok(writer.written())
}

/// Returns the length of the trailing partial group, or [DecodeError::InvalidLength] if no
/// input could have been encoded to that length.
fn check_length(input_len: usize) -> Result<usize, DecodeError> {
    match input_len % ENCODED_GROUP_LEN {
        1 => Err(DecodeError::InvalidLength),
        rem => Ok(rem),
    }
}

/// Accumulate up to 5 digits, most significant first.
///
/// Missing trailing digits count as [MAX_DIGIT]. The encoder zeroed the bytes it truncated, so
/// this rounds the value up by less than one unit of the last byte that was kept, and the kept
/// bytes come out unchanged.
///
/// `offset` is the position of `group` in the overall input, for error reporting.
#[inline]
fn decode_group(alphabet: &Alphabet, group: &[u8], offset: usize) -> Result<u32, DecodeError> {
    debug_assert!(group.len() <= ENCODED_GROUP_LEN);

    let mut accum: u64 = 0;
    for (index, &byte) in group.iter().enumerate() {
        let digit = alphabet.digit(byte);
        if digit == INVALID_VALUE {
            return Err(DecodeError::InvalidCharacter(offset + index, byte));
        }

        accum = accum * 85 + u64::from(digit);
    }

    for _ in group.len()..ENCODED_GROUP_LEN {
        accum = accum * 85 + MAX_DIGIT;
    }

    u32::try_from(accum).map_err(|_| DecodeError::GroupOverflow(offset))
}
