pub mod forwarder;
pub mod responder;
pub mod server;

pub use forwarder::UdpForwarder;
pub use server::DnsFrontEnd;

use std::net::{Ipv4Addr, SocketAddr};

/// Best-effort detection of the primary local IPv4 address, used as the
/// default block-page target. Connecting a UDP socket selects a route
/// without sending anything; loopback is the fallback.
pub fn detect_local_ipv4(upstream: SocketAddr) -> Ipv4Addr {
    let probe = || -> std::io::Result<Ipv4Addr> {
        let socket = std::net::UdpSocket::bind("0.0.0.0:0")?;
        socket.connect(upstream)?;
        match socket.local_addr()?.ip() {
            std::net::IpAddr::V4(ip) => Ok(ip),
            std::net::IpAddr::V6(_) => Ok(Ipv4Addr::LOCALHOST),
        }
    };
    probe().unwrap_or(Ipv4Addr::LOCALHOST)
}
