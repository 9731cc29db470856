//! One-shot UDP transmission of encoded ArtDMX packets.
//!
//! Art-Net is fire-and-forget: one datagram per send, fixed destination
//! port, no response, no retry. The socket lives on the stack for exactly
//! one `send_to` and is closed on every exit path when it drops. All
//! encoding happens before the socket is opened, so argument errors never
//! touch the network.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

use thiserror::Error;

use crate::SendReport;
use crate::channels::ChannelMap;
use crate::protocols::artnet::{self, layout};

#[derive(Debug, Error)]
pub enum SendError {
    #[error("cannot resolve Art-Net target '{host}': {source}")]
    Resolve {
        host: String,
        source: std::io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Encode(#[from] artnet::ArtNetError),
}

/// Resolve `host` to a socket address on the fixed Art-Net port (6454).
pub fn resolve_target(host: &str) -> Result<SocketAddr, SendError> {
    let resolve_err = |source| SendError::Resolve {
        host: host.to_string(),
        source,
    };
    (host, layout::ARTNET_PORT)
        .to_socket_addrs()
        .map_err(resolve_err)?
        .next()
        .ok_or_else(|| {
            resolve_err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no addresses returned",
            ))
        })
}

/// Encode the map for `universe` and send it once to `host:6454`.
///
/// `zero_out` does not alter the encoded frame; it is echoed in the report
/// only. Unset channels below the highest referenced one are always zero.
pub fn send_artdmx(
    host: &str,
    universe: u16,
    channels: &ChannelMap,
    zero_out: bool,
) -> Result<SendReport, SendError> {
    let target = resolve_target(host)?;
    send_artdmx_to(target, universe, channels, zero_out)
}

/// Same as [`send_artdmx`], for an already-resolved target address.
pub fn send_artdmx_to(
    target: SocketAddr,
    universe: u16,
    channels: &ChannelMap,
    zero_out: bool,
) -> Result<SendReport, SendError> {
    let frame = channels.to_frame();
    let packet = artnet::encode_artdmx(universe, &frame)?;

    let socket = UdpSocket::bind(local_bind_addr(target))?;
    socket.send_to(&packet, target)?;
    drop(socket);

    Ok(SendReport::sent(
        target.to_string(),
        universe,
        frame.len() as u16,
        zero_out,
        &packet,
    ))
}

fn local_bind_addr(target: SocketAddr) -> SocketAddr {
    // Match the target's address family or the send would fail.
    if target.is_ipv4() {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
    } else {
        SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
    }
}

#[cfg(test)]
mod tests {
    use std::net::UdpSocket;
    use std::time::Duration;

    use super::{resolve_target, send_artdmx_to};
    use crate::channels::ChannelMap;
    use crate::protocols::artnet::layout;

    #[test]
    fn resolve_uses_fixed_artnet_port() {
        let addr = resolve_target("127.0.0.1").unwrap();
        assert_eq!(addr.port(), layout::ARTNET_PORT);
        assert!(addr.ip().is_loopback());
    }

    #[test]
    fn resolve_empty_host_fails() {
        let err = resolve_target("").unwrap_err();
        assert!(err.to_string().contains("cannot resolve"));
    }

    #[test]
    fn datagram_arrives_with_encoded_frame() {
        let listener = UdpSocket::bind("127.0.0.1:0").expect("bind listener");
        listener
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("set timeout");
        let target = listener.local_addr().expect("local addr");

        let channels = ChannelMap::from_tokens(["0,255", "4,7"]).unwrap();
        let report = send_artdmx_to(target, 3, &channels, false).unwrap();
        assert_eq!(report.frame_length, 5);
        assert_eq!(report.target, target.to_string());

        let mut buf = [0u8; 1024];
        let (len, _) = listener.recv_from(&mut buf).expect("recv datagram");
        let packet = &buf[..len];
        assert_eq!(len, layout::DMX_DATA_OFFSET + 5);
        assert_eq!(&packet[layout::SIGNATURE_RANGE], layout::ARTNET_ID);
        assert_eq!(&packet[layout::UNIVERSE_RANGE], &[0x00, 0x03]);
        assert_eq!(&packet[layout::DMX_DATA_OFFSET..], &[255, 0, 0, 0, 7]);
    }

    #[test]
    fn empty_map_sends_header_only_datagram() {
        let listener = UdpSocket::bind("127.0.0.1:0").expect("bind listener");
        listener
            .set_read_timeout(Some(Duration::from_secs(5)))
            .expect("set timeout");
        let target = listener.local_addr().expect("local addr");

        let channels = ChannelMap::default();
        let report = send_artdmx_to(target, 0, &channels, true).unwrap();
        assert_eq!(report.frame_length, 0);
        assert!(report.zero_out);

        let mut buf = [0u8; 64];
        let (len, _) = listener.recv_from(&mut buf).expect("recv datagram");
        assert_eq!(len, layout::DMX_DATA_OFFSET);
        assert_eq!(&buf[layout::LENGTH_RANGE], &[0x00, 0x00]);
    }
}
