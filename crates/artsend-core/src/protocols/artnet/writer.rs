use super::error::ArtNetError;

/// Bounds-checked field writer over a zero-initialized packet buffer.
///
/// All multi-byte fields are written big-endian; offsets come from `layout`
/// so no caller indexes the buffer directly.
pub struct ArtNetWriter {
    buf: Vec<u8>,
}

impl ArtNetWriter {
    /// Allocate a zeroed buffer of exactly `len` bytes.
    pub fn zeroed(len: usize) -> Self {
        Self { buf: vec![0u8; len] }
    }

    pub fn write_slice(
        &mut self,
        range: std::ops::Range<usize>,
        bytes: &[u8],
    ) -> Result<(), ArtNetError> {
        let capacity = self.buf.len();
        let slot = self
            .buf
            .get_mut(range.clone())
            .ok_or(ArtNetError::OutOfBounds {
                needed: range.end,
                capacity,
            })?;
        if slot.len() != bytes.len() {
            return Err(ArtNetError::LengthMismatch {
                range_len: slot.len(),
                slice_len: bytes.len(),
            });
        }
        slot.copy_from_slice(bytes);
        Ok(())
    }

    pub fn write_u16_be(
        &mut self,
        range: std::ops::Range<usize>,
        value: u16,
    ) -> Result<(), ArtNetError> {
        self.write_slice(range, &value.to_be_bytes())
    }

    pub fn write_u8(&mut self, offset: usize, value: u8) -> Result<(), ArtNetError> {
        let capacity = self.buf.len();
        let slot = self.buf.get_mut(offset).ok_or(ArtNetError::OutOfBounds {
            needed: offset + 1,
            capacity,
        })?;
        *slot = value;
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::ArtNetWriter;
    use crate::protocols::artnet::error::ArtNetError;

    #[test]
    fn writes_land_at_requested_offsets() {
        let mut writer = ArtNetWriter::zeroed(4);
        writer.write_u16_be(1..3, 0x5000).unwrap();
        writer.write_u8(3, 0xAB).unwrap();
        assert_eq!(writer.into_bytes(), vec![0x00, 0x50, 0x00, 0xAB]);
    }

    #[test]
    fn out_of_bounds_write_rejected() {
        let mut writer = ArtNetWriter::zeroed(2);
        let err = writer.write_u16_be(1..3, 1).unwrap_err();
        assert!(err.to_string().contains("too small"));
        let err = writer.write_u8(2, 1).unwrap_err();
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn slice_length_must_match_range() {
        let mut writer = ArtNetWriter::zeroed(8);
        let err = writer.write_slice(0..2, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            &err,
            ArtNetError::LengthMismatch {
                range_len: 2,
                slice_len: 3,
            }
        ));
        assert!(err.to_string().contains("field is 2 bytes"));
    }
}
