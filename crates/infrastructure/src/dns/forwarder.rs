use hickory_proto::op::Message;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::debug;
use warden_dns_domain::CoreError;

/// Maximum UDP DNS response size we accept from upstream.
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// Forwards raw query datagrams to the upstream recursive resolver.
///
/// The original wire bytes are relayed untouched, so the upstream sees the
/// client's exact question and the reply carries the same transaction id.
/// Each exchange uses a fresh connected socket; the kernel then filters
/// datagrams from other sources.
pub struct UdpForwarder {
    upstream: SocketAddr,
    exchange_timeout: Duration,
}

impl UdpForwarder {
    pub fn new(upstream: SocketAddr, exchange_timeout: Duration) -> Self {
        Self {
            upstream,
            exchange_timeout,
        }
    }

    pub fn upstream(&self) -> SocketAddr {
        self.upstream
    }

    /// Send `raw_query` upstream and parse the first matching response.
    pub async fn forward(&self, raw_query: &[u8]) -> Result<Message, CoreError> {
        timeout(self.exchange_timeout, self.exchange(raw_query))
            .await
            .map_err(|_| {
                CoreError::UpstreamDns(format!("timeout waiting for {}", self.upstream))
            })?
    }

    async fn exchange(&self, raw_query: &[u8]) -> Result<Message, CoreError> {
        let bind_addr = if self.upstream.is_ipv4() {
            SocketAddr::from((std::net::Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((std::net::Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| CoreError::UpstreamDns(format!("bind failed: {e}")))?;
        socket
            .connect(self.upstream)
            .await
            .map_err(|e| CoreError::UpstreamDns(format!("connect failed: {e}")))?;
        socket
            .send(raw_query)
            .await
            .map_err(|e| CoreError::UpstreamDns(format!("send failed: {e}")))?;

        let expected_id = u16::from_be_bytes([raw_query[0], raw_query[1]]);
        let mut buf = [0u8; MAX_UDP_RESPONSE_SIZE];

        // Datagrams with a foreign transaction id are stale responses from
        // an earlier exchange on a reused port; skip them.
        loop {
            let len = socket
                .recv(&mut buf)
                .await
                .map_err(|e| CoreError::UpstreamDns(format!("recv failed: {e}")))?;
            if len >= 2 && u16::from_be_bytes([buf[0], buf[1]]) != expected_id {
                debug!(upstream = %self.upstream, "Discarding response with stale transaction id");
                continue;
            }
            return Message::from_vec(&buf[..len])
                .map_err(|e| CoreError::UpstreamDns(format!("bad upstream response: {e}")));
        }
    }
}
