//! Artsend core library for one-shot Art-Net DMX transmission.
//!
//! This crate implements the pipeline used by the CLI: channel tokens are
//! validated into a sparse [`ChannelMap`], materialized into a dense DMX
//! frame sized to the highest referenced channel, encoded as an ArtDMX
//! packet (layout/writer/encoder), and sent once over UDP. Encoding is
//! byte-oriented and side-effect free; all I/O is isolated in `transport`.
//! A symmetric parser decodes produced packets for verification.
//!
//! Invariants:
//! - Validation completes before any network activity; no partial sends.
//! - The frame length equals the highest referenced channel (0..=512),
//!   with unset lower channels zero. It is never padded to 512.
//! - One datagram per invocation; the socket is scoped to that send.
//!
//! Version française (résumé):
//! Cette crate fournit le cœur d'envoi ArtDMX : jetons de canaux ->
//! [`ChannelMap`] -> trame DMX dense -> paquet encodé -> un datagramme UDP.
//! L'encodage est pur, les E/S restent dans `transport`, la vérification se
//! fait par décodage aller-retour.
//!
//! # Examples
//! ```no_run
//! use artsend_core::{ChannelMap, send_artdmx};
//!
//! let channels = ChannelMap::from_tokens(["0,255", "4,7"])?;
//! let report = send_artdmx("192.168.1.50", 0, &channels, false)?;
//! println!("sent {} bytes: {}", report.frame_length, report.packet_hex);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod channels;
mod protocols;
mod transport;

pub use channels::{ChannelError, ChannelMap, MAX_CHANNELS};
pub use protocols::artnet::layout::{ARTNET_ID, ARTNET_PORT};
pub use protocols::artnet::{ArtDmx, ArtNetError, encode_artdmx, parse_artdmx};
pub use transport::{SendError, resolve_target, send_artdmx, send_artdmx_to};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Serializable record of one encoded (and usually transmitted) packet.
///
/// # Examples
/// ```
/// use artsend_core::SendReport;
///
/// let report = SendReport::sent("10.0.0.9:6454", 1, 1, false, &[0xFF]);
/// assert_eq!(report.report_version, artsend_core::REPORT_VERSION);
/// assert_eq!(report.packet_hex, "ff");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Destination in `ip:port` form (port is always 6454 for real sends).
    pub target: String,
    /// Universe identifier as encoded in the packet header.
    pub universe: u16,
    /// DMX frame length in channels (0..=512).
    pub frame_length: u16,
    /// Caller's zero-out flag, echoed verbatim; it never alters the frame.
    pub zero_out: bool,
    /// True when the packet was encoded but deliberately not transmitted.
    pub dry_run: bool,
    /// Lowercase hex dump of the full packet, for diagnostic display.
    pub packet_hex: String,
}

impl SendReport {
    /// Report for a packet that went out on the wire.
    pub fn sent(
        target: impl Into<String>,
        universe: u16,
        frame_length: u16,
        zero_out: bool,
        packet: &[u8],
    ) -> Self {
        Self::build(target, universe, frame_length, zero_out, false, packet)
    }

    /// Report for a packet that was encoded but not transmitted.
    pub fn dry_run(
        target: impl Into<String>,
        universe: u16,
        frame_length: u16,
        zero_out: bool,
        packet: &[u8],
    ) -> Self {
        Self::build(target, universe, frame_length, zero_out, true, packet)
    }

    fn build(
        target: impl Into<String>,
        universe: u16,
        frame_length: u16,
        zero_out: bool,
        dry_run: bool,
        packet: &[u8],
    ) -> Self {
        Self {
            report_version: REPORT_VERSION,
            tool: ToolInfo {
                name: "artsend".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            target: target.into(),
            universe,
            frame_length,
            zero_out,
            dry_run,
            packet_hex: packet_hex(packet),
        }
    }
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use artsend_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "artsend".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "artsend");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    /// Tool name (e.g., "artsend").
    pub name: String,
    /// Tool version (semver).
    pub version: String,
}

/// Lowercase hex rendering of a packet, two digits per byte.
///
/// # Examples
/// ```
/// use artsend_core::packet_hex;
///
/// assert_eq!(packet_hex(&[0x41, 0x72, 0x00]), "417200");
/// ```
pub fn packet_hex(packet: &[u8]) -> String {
    hex::encode(packet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_all_fields() {
        let packet = encode_artdmx(1, &[0xFF]).unwrap();
        let report = SendReport::sent("127.0.0.1:6454", 1, 1, false, &packet);

        let value = serde_json::to_value(&report).expect("report json");
        assert_eq!(value["report_version"], REPORT_VERSION);
        assert_eq!(value["tool"]["name"], "artsend");
        assert_eq!(value["target"], "127.0.0.1:6454");
        assert_eq!(value["universe"], 1);
        assert_eq!(value["frame_length"], 1);
        assert_eq!(value["zero_out"], false);
        assert_eq!(value["dry_run"], false);
        assert_eq!(value["packet_hex"], "4172742d4e65740000500000000000010001ff");
    }

    #[test]
    fn dry_run_report_is_flagged() {
        let report = SendReport::dry_run("host:6454", 0, 0, true, &[]);
        assert!(report.dry_run);
        assert!(report.zero_out);
        assert!(report.packet_hex.is_empty());
    }

    #[test]
    fn packet_hex_is_lowercase_pairs() {
        assert_eq!(packet_hex(&[]), "");
        assert_eq!(packet_hex(&[0x00, 0xAB, 0x05]), "00ab05");
    }
}
