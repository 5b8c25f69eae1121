use std::io::ErrorKind;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};

use bytes::BytesMut;
use socket2::{Domain, Protocol, Socket, Type};
use tracing::{info, trace};

use crate::core::{Error, Result, SwarmConfig, MAX_DATAGRAM_SIZE, MULTICAST_TTL};
use super::{Datagram, Transport};

/// UDP multicast transport bound to the swarm's group and port
///
/// The socket is non-blocking with loopback disabled, so a node never observes
/// its own datagrams. Address reuse lets several nodes share one host during
/// development.
pub struct MulticastTransport {
    socket: UdpSocket,
    group: SocketAddrV4,
    identity: String,
}

impl MulticastTransport {
    /// Joins the multicast group and prepares the socket for polling
    ///
    /// This is the node's bring-up step; failure here is the one hard-fail
    /// path and should abort the process rather than be retried.
    pub fn open(config: &SwarmConfig) -> Result<Self> {
        let group = SocketAddrV4::new(config.multicast_group, config.port);

        let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;
        socket.set_reuse_address(true)?;
        socket.bind(&SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port)).into())?;
        socket.join_multicast_v4(&config.multicast_group, &Ipv4Addr::UNSPECIFIED)?;
        socket.set_multicast_ttl_v4(MULTICAST_TTL)?;
        socket.set_multicast_loop_v4(false)?;
        socket.set_nonblocking(true)?;

        let socket: UdpSocket = socket.into();
        let identity = local_identity(group);
        info!(%identity, group = %group, "joined multicast group");

        Ok(MulticastTransport {
            socket,
            group,
            identity,
        })
    }

    /// The address string peers will see this node as
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl Transport for MulticastTransport {
    fn broadcast(&mut self, payload: &[u8]) -> Result<()> {
        self.socket
            .send_to(payload, self.group)
            .map_err(|e| Error::network(format!("broadcast failed: {}", e)))?;
        Ok(())
    }

    fn poll_recv(&mut self) -> Result<Option<Datagram>> {
        let mut buf = [0u8; MAX_DATAGRAM_SIZE];
        match self.socket.recv_from(&mut buf) {
            Ok((len, addr)) => Ok(Some(Datagram {
                payload: BytesMut::from(&buf[..len]),
                sender: addr.ip().to_string(),
            })),
            Err(e) if e.kind() == ErrorKind::WouldBlock => Ok(None),
            Err(e) => Err(Error::network(format!("receive failed: {}", e))),
        }
    }
}

/// Best-effort probe for the local address peers will see
///
/// Connecting a throwaway UDP socket toward the group resolves the outbound
/// interface without sending anything. Falls back to the unspecified address
/// when no route exists yet.
fn local_identity(group: SocketAddrV4) -> String {
    let probe = || -> std::io::Result<String> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
        socket.connect(group)?;
        Ok(socket.local_addr()?.ip().to_string())
    };

    probe().unwrap_or_else(|e| {
        trace!(error = %e, "identity probe failed");
        Ipv4Addr::UNSPECIFIED.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_broadcast() {
        let mut config = SwarmConfig::default();
        config.port = 15020;

        let mut transport = match MulticastTransport::open(&config) {
            Ok(t) => t,
            // Hosts without a multicast-capable interface can't run this test
            Err(e) => {
                eprintln!("skipping: {}", e);
                return;
            }
        };

        assert!(!transport.identity().is_empty());
        let _ = transport.broadcast(b"1,100,0,0");
    }

    #[test]
    fn test_poll_recv_idle_medium() {
        let mut config = SwarmConfig::default();
        config.port = 15021;

        let mut transport = match MulticastTransport::open(&config) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("skipping: {}", e);
                return;
            }
        };

        // Loopback is off and nobody else is on this port
        assert!(transport.poll_recv().unwrap().is_none());
    }

    #[test]
    fn test_shared_port_reuse() {
        let mut config = SwarmConfig::default();
        config.port = 15022;

        let first = MulticastTransport::open(&config);
        let second = MulticastTransport::open(&config);
        if let (Ok(_), Ok(_)) = (&first, &second) {
            // Two nodes on one host can share the group port
        } else {
            eprintln!("skipping: multicast unavailable");
        }
    }
}
