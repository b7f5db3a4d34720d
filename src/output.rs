use crate::DecodeError;

/// Appends decoded bytes to a caller-owned slice without ever growing it.
pub(crate) struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> SliceWriter<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> SliceWriter<'a> {
        SliceWriter { buf, len: 0 }
    }

    /// Write `bytes` after what's already been written.
    ///
    /// Fails without writing anything if they don't all fit.
    pub(crate) fn write(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        let end = self
            .len
            .checked_add(bytes.len())
            .filter(|&end| end <= self.buf.len())
            .ok_or(DecodeError::BufferTooSmall)?;

        self.buf[self.len..end].copy_from_slice(bytes);
        self.len = end;

        Ok(())
    }

    /// Number of bytes written so far.
    pub(crate) fn written(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::SliceWriter;
    use crate::DecodeError;

    #[test]
    fn write_until_full() {
        let mut buf = [0_u8; 4];
        let mut writer = SliceWriter::new(&mut buf);

        writer.write(&[1, 2, 3]).unwrap();
        assert_eq!(Err(DecodeError::BufferTooSmall), writer.write(&[4, 5]));
        writer.write(&[4]).unwrap();
        assert_eq!(Err(DecodeError::BufferTooSmall), writer.write(&[5]));
        // empty writes always fit
        writer.write(&[]).unwrap();
        assert_eq!(4, writer.written());

        assert_eq!([1, 2, 3, 4], buf);
    }

    #[test]
    fn failed_write_leaves_buffer_alone() {
        let mut buf = [0xAA_u8; 2];
        let mut writer = SliceWriter::new(&mut buf);

        assert_eq!(Err(DecodeError::BufferTooSmall), writer.write(&[1, 2, 3]));
        assert_eq!(0, writer.written());
        assert_eq!([0xAA, 0xAA], buf);
    }
}
