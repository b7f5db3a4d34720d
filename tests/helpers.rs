// each test crate uses a different subset
#![allow(dead_code)]

use bin2text::{base64::Mode, base85, DecodeError};

/// Encode into an exactly-sized buffer and return the text without its NUL.
pub fn encode_string(mode: Mode, input: &[u8]) -> String {
    let required = mode.encode(input, &mut [0_u8; 0]);

    let mut buf = vec![0_u8; required + 1];
    assert_eq!(required, mode.encode(input, &mut buf));
    assert_eq!(Some(&0), buf.last());
    buf.pop();

    String::from_utf8(buf).unwrap()
}

pub fn decode_vec(mode: Mode, input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut buf = vec![0_u8; mode.decoded_len(input)?];
    let written = mode.decode(input, &mut buf)?;
    assert_eq!(buf.len(), written);

    Ok(buf)
}

pub fn encode_string_base85(alphabet: &base85::Alphabet, input: &[u8]) -> String {
    let required = base85::encode(alphabet, input, &mut [0_u8; 0]);

    let mut buf = vec![0_u8; required + 1];
    assert_eq!(required, base85::encode(alphabet, input, &mut buf));
    assert_eq!(Some(&0), buf.last());
    buf.pop();

    String::from_utf8(buf).unwrap()
}

pub fn decode_vec_base85(
    alphabet: &base85::Alphabet,
    input: &str,
) -> Result<Vec<u8>, DecodeError> {
    let mut buf = vec![0_u8; base85::decoded_len(alphabet, input)?];
    let written = base85::decode(alphabet, input, &mut buf)?;
    assert_eq!(buf.len(), written);

    Ok(buf)
}

pub fn compare_decode(mode: Mode, expected: &str, target: &str) {
    assert_eq!(
        expected,
        String::from_utf8(decode_vec(mode, target).unwrap()).unwrap()
    );
}

pub fn compare_decode_base85(alphabet: &base85::Alphabet, expected: &str, target: &str) {
    assert_eq!(
        expected,
        String::from_utf8(decode_vec_base85(alphabet, target).unwrap()).unwrap()
    );
}
