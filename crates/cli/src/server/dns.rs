use crate::di::Services;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::info;
use warden_dns_domain::Config;
use warden_dns_infrastructure::dns::detect_local_ipv4;
use warden_dns_infrastructure::{DnsFrontEnd, UdpForwarder};

pub async fn start_dns_server(config: Config, services: Services) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = config.server.dns_bind.parse()?;
    let upstream: SocketAddr = config.upstream.address.parse()?;

    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;

    // Default kernel buffers (~256KB) drop datagrams under query bursts.
    socket.set_recv_buffer_size(8 * 1024 * 1024)?;
    socket.set_send_buffer_size(4 * 1024 * 1024)?;

    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    let udp_socket = UdpSocket::from_std(std_socket)?;

    let detected_ip = detect_local_ipv4(upstream);
    let forwarder = UdpForwarder::new(
        upstream,
        Duration::from_secs(config.upstream.timeout_secs),
    );

    let front = Arc::new(DnsFrontEnd::new(
        Arc::new(udp_socket),
        forwarder,
        Arc::clone(&services.bindings),
        Arc::clone(&services.policy),
        Arc::clone(&services.blocking),
        detected_ip,
        Arc::clone(&services.telemetry),
    ));

    info!(bind = %socket_addr, upstream = %upstream, block_page_ip = %detected_ip, "DNS server ready");
    front.run().await;
    Ok(())
}
