use super::error::ArtNetError;
use super::layout;
use super::writer::ArtNetWriter;

/// Encode one ArtDMX packet for `universe` carrying `frame`.
///
/// The packet is `layout::DMX_DATA_OFFSET + frame.len()` bytes: the Art-Net
/// signature, the fixed zero byte, opcode 0x5000, a zero sequence/physical
/// pair, the universe, and the frame length, all big-endian, followed by the
/// frame itself. An empty frame yields a header-only 18-byte packet.
pub fn encode_artdmx(universe: u16, frame: &[u8]) -> Result<Vec<u8>, ArtNetError> {
    if frame.len() > layout::DMX_MAX_SLOTS {
        return Err(ArtNetError::InvalidLength {
            length: frame.len(),
        });
    }

    let mut writer = ArtNetWriter::zeroed(layout::DMX_DATA_OFFSET + frame.len());
    writer.write_slice(layout::SIGNATURE_RANGE, layout::ARTNET_ID)?;
    writer.write_u8(layout::FIXED_OFFSET, 0x00)?;
    writer.write_u16_be(layout::OP_CODE_RANGE, layout::ARTDMX_OPCODE)?;
    writer.write_u16_be(layout::SEQUENCE_RANGE, layout::SEQUENCE_NONE)?;
    writer.write_u8(layout::PHYSICAL_OFFSET, layout::PHYSICAL_NONE)?;
    writer.write_u16_be(layout::UNIVERSE_RANGE, universe)?;
    writer.write_u16_be(layout::LENGTH_RANGE, frame.len() as u16)?;
    writer.write_slice(
        layout::DMX_DATA_OFFSET..layout::DMX_DATA_OFFSET + frame.len(),
        frame,
    )?;
    Ok(writer.into_bytes())
}
