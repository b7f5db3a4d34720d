use core::fmt;
#[cfg(any(feature = "std", test))]
use std::error;

/// Errors that can occur while decoding or measuring encoded text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// A symbol outside the active alphabet was found, or a padding byte appeared where padding
    /// is not allowed. The offset and offending byte are provided.
    ///
    /// When padding is misplaced, the offset is that of the first padding byte.
    InvalidCharacter(usize, u8),
    /// The length of the input cannot be the output of the encoder, e.g. a standard base64
    /// string whose length is not a multiple of 4, or a base85 string with a single trailing
    /// symbol.
    InvalidLength,
    /// The decoded bytes do not fit in the output buffer. Some output may already have been
    /// written.
    BufferTooSmall,
    /// The base85 group starting at the provided offset encodes a value larger than `u32::MAX`.
    GroupOverflow(usize),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::InvalidCharacter(index, byte) => {
                write!(f, "Invalid character {}, offset {}.", byte, index)
            }
            Self::InvalidLength => write!(f, "Encoded text length cannot be decoded."),
            Self::BufferTooSmall => write!(f, "Output buffer too small."),
            Self::GroupOverflow(index) => {
                write!(f, "Group at offset {} does not fit in 32 bits.", index)
            }
        }
    }
}

#[cfg(any(feature = "std", test))]
impl error::Error for DecodeError {}
