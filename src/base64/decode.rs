use super::{alphabet::INVALID_VALUE, Variant, PAD_BYTE};
use crate::{output::SliceWriter, DecodeError};

/// Calculate the exact number of bytes that `input` decodes to, validating it along the way.
///
/// Empty input decodes to nothing. Otherwise:
///
/// - [Standard](super::Standard) input must be a multiple of 4 long, and may end in at most two
///   [PAD_BYTE]s.
/// - [UrlSafe](super::UrlSafe) input must not be one more than a multiple of 4 long, since no
///   number of bytes encodes to that, and must not contain any padding.
///
/// The length is checked before the content.
///
/// ```
/// use bin2text::{base64::{decoded_len, Standard, UrlSafe}, DecodeError};
///
/// assert_eq!(Ok(1), decoded_len::<Standard, _>("TQ=="));
/// assert_eq!(Ok(1), decoded_len::<UrlSafe, _>("TQ"));
/// assert_eq!(Err(DecodeError::InvalidLength), decoded_len::<UrlSafe, _>("Q"));
/// ```
pub fn decoded_len<V: Variant, T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<usize, DecodeError> {
    let input_bytes = input.as_ref();

    if input_bytes.is_empty() {
        return Ok(0);
    }

    let rem = check_length::<V>(input_bytes.len())?;
    let decode_table = V::decode_table();

    let mut padding_bytes = 0;
    let mut first_padding_index = 0;

    for (index, &byte) in input_bytes.iter().enumerate() {
        if V::PADDING && byte == PAD_BYTE {
            if padding_bytes == 0 {
                first_padding_index = index;
            }

            padding_bytes += 1;
            continue;
        }

        // Padding may only be a suffix. Report the first padding byte, which is where decode()
        // would notice.
        if padding_bytes > 0 {
            return Err(DecodeError::InvalidCharacter(first_padding_index, PAD_BYTE));
        }

        if decode_table[byte as usize] == INVALID_VALUE {
            return Err(DecodeError::InvalidCharacter(index, byte));
        }
    }

    if padding_bytes > 2 {
        return Err(DecodeError::InvalidCharacter(first_padding_index, PAD_BYTE));
    }

    // a trailing partial group of n symbols holds n - 1 bytes
    Ok(input_bytes.len() / 4 * 3 + rem.saturating_sub(1) - padding_bytes)
}

/// Decode base64 `input` into `output`.
///
/// Returns the number of bytes written. Input is validated as described for [decoded_len()],
/// and each group of 4 symbols is checked against the alphabet before its 3 bytes are written.
///
/// If `output` fills up, [DecodeError::BufferTooSmall] is returned. The groups decoded before
/// that point will have been written.
///
/// Trailing bits in the last symbol that don't make up a whole byte are ignored.
///
/// ```
/// use bin2text::{base64::{self, Standard}, DecodeError};
///
/// let mut buf = [0_u8; 2];
/// assert_eq!(Ok(2), base64::decode::<Standard, _>("TWE=", &mut buf));
/// assert_eq!(b"Ma", &buf);
///
/// assert_eq!(
///     Err(DecodeError::BufferTooSmall),
///     base64::decode::<Standard, _>("TWFu", &mut buf)
/// );
/// ```
pub fn decode<V: Variant, T: ?Sized + AsRef<[u8]>>(
    input: &T,
    output: &mut [u8],
) -> Result<usize, DecodeError> {
    let input_bytes = input.as_ref();

    if input_bytes.is_empty() {
        return Ok(0);
    }

    let rem = check_length::<V>(input_bytes.len())?;
    let decode_table = V::decode_table();
    let mut writer = SliceWriter::new(output);

    // The last group, complete or not, may be padded, so it's handled after the others.
    let start_of_suffix = input_bytes.len() - if rem == 0 { 4 } else { rem };

    for (chunk_index, chunk) in input_bytes[..start_of_suffix].chunks_exact(4).enumerate() {
        let decoded = decode_group(chunk, chunk_index * 4, decode_table)?;
        writer.write(&decoded.to_be_bytes()[1..])?;
    }

    let mut suffix = &input_bytes[start_of_suffix..];
    if V::PADDING {
        // Strip at most 2 padding bytes. Any padding left over is an invalid character.
        while suffix.len() > 2 && suffix.last() == Some(&PAD_BYTE) {
            suffix = &suffix[..suffix.len() - 1];
        }
    }

    // 2, 3, or 4 symbols remain, which hold 1, 2, or 3 bytes
    let decoded = decode_group(suffix, start_of_suffix, decode_table)?;
    writer.write(&decoded.to_be_bytes()[1..suffix.len()])?;

    Ok(writer.written())
}

/// Returns the length of the trailing partial group, or [DecodeError::InvalidLength] if no
/// input could have been encoded to that length.
fn check_length<V: Variant>(input_len: usize) -> Result<usize, DecodeError> {
    match input_len % 4 {
        1 => Err(DecodeError::InvalidLength),
        rem if V::PADDING && rem != 0 => Err(DecodeError::InvalidLength),
        rem => Ok(rem),
    }
}

/// Pack up to 4 symbols into the low 24 bits of a `u32`, most significant first.
///
/// `offset` is the position of `group` in the overall input, for error reporting.
#[inline]
fn decode_group(group: &[u8], offset: usize, decode_table: &[u8; 256]) -> Result<u32, DecodeError> {
    group
        .iter()
        .enumerate()
        .try_fold(0_u32, |accum, (index, &byte)| {
            let morsel = decode_table[byte as usize];
            if morsel == INVALID_VALUE {
                return Err(DecodeError::InvalidCharacter(offset + index, byte));
            }

            Ok(accum | u32::from(morsel) << (18 - 6 * index))
        })
}
