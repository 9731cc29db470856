use super::error::ArtNetError;
use super::layout;

/// Decoded ArtDMX packet, as produced by [`super::encode_artdmx`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtDmx {
    pub universe: u16,
    pub data: Vec<u8>,
}

/// Decode an ArtDMX payload produced by this crate's encoder.
///
/// Returns `Ok(None)` when the payload is well-formed but not ArtDMX (wrong
/// signature or opcode); errors when it is truncated or carries an invalid
/// frame length. Used for round-trip verification of encoded packets.
pub fn parse_artdmx(payload: &[u8]) -> Result<Option<ArtDmx>, ArtNetError> {
    require_len(payload, layout::DMX_DATA_OFFSET)?;

    if &payload[layout::SIGNATURE_RANGE] != layout::ARTNET_ID {
        return Ok(None);
    }
    if read_u16_be(payload, layout::OP_CODE_RANGE)? != layout::ARTDMX_OPCODE {
        return Ok(None);
    }

    let universe = read_u16_be(payload, layout::UNIVERSE_RANGE)?;
    let length = read_u16_be(payload, layout::LENGTH_RANGE)? as usize;
    if length > layout::DMX_MAX_SLOTS {
        return Err(ArtNetError::InvalidLength { length });
    }

    let end = layout::DMX_DATA_OFFSET + length;
    require_len(payload, end)?;
    Ok(Some(ArtDmx {
        universe,
        data: payload[layout::DMX_DATA_OFFSET..end].to_vec(),
    }))
}

fn require_len(payload: &[u8], needed: usize) -> Result<(), ArtNetError> {
    if payload.len() < needed {
        return Err(ArtNetError::TooShort {
            needed,
            actual: payload.len(),
        });
    }
    Ok(())
}

fn read_u16_be(payload: &[u8], range: std::ops::Range<usize>) -> Result<u16, ArtNetError> {
    let bytes = payload.get(range.clone()).ok_or(ArtNetError::TooShort {
        needed: range.end,
        actual: payload.len(),
    })?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

#[cfg(test)]
mod tests {
    use super::parse_artdmx;
    use crate::protocols::artnet::{encode_artdmx, layout};

    #[test]
    fn round_trip_recovers_universe_and_frame() {
        let frame = [0, 0, 0, 0, 7];
        let packet = encode_artdmx(42, &frame).unwrap();
        let decoded = parse_artdmx(&packet).unwrap().unwrap();
        assert_eq!(decoded.universe, 42);
        assert_eq!(decoded.data, frame);
    }

    #[test]
    fn round_trip_empty_frame() {
        let packet = encode_artdmx(0, &[]).unwrap();
        let decoded = parse_artdmx(&packet).unwrap().unwrap();
        assert_eq!(decoded.universe, 0);
        assert!(decoded.data.is_empty());
    }

    #[test]
    fn non_artnet_signature_is_not_artdmx() {
        let payload = vec![0u8; layout::DMX_DATA_OFFSET];
        assert!(parse_artdmx(&payload).unwrap().is_none());
    }

    #[test]
    fn wrong_opcode_is_not_artdmx() {
        let mut packet = encode_artdmx(0, &[]).unwrap();
        packet[layout::OP_CODE_RANGE][0] = 0x21;
        assert!(parse_artdmx(&packet).unwrap().is_none());
    }

    #[test]
    fn truncated_payload_rejected() {
        let payload = vec![0u8; layout::DMX_DATA_OFFSET - 1];
        let err = parse_artdmx(&payload).unwrap_err();
        assert!(err.to_string().contains("payload too short"));
    }

    #[test]
    fn truncated_frame_rejected() {
        let mut packet = encode_artdmx(0, &[1, 2, 3]).unwrap();
        packet.pop();
        let err = parse_artdmx(&packet).unwrap_err();
        assert!(err.to_string().contains("payload too short"));
    }

    #[test]
    fn oversized_length_field_rejected() {
        let mut packet = encode_artdmx(0, &[]).unwrap();
        let bad = (layout::DMX_MAX_SLOTS as u16 + 1).to_be_bytes();
        packet[layout::LENGTH_RANGE].copy_from_slice(&bad);
        let err = parse_artdmx(&packet).unwrap_err();
        assert!(err.to_string().contains("invalid DMX frame length"));
    }
}
