use super::forwarder::UdpForwarder;
use super::responder;
use crate::telemetry::TelemetrySink;
use arc_swap::ArcSwap;
use hickory_proto::op::{Message, MessageType};
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, trace, warn};
use warden_dns_application::services::{ClientBindingCache, PolicyResolver};
use warden_dns_domain::config::BlockingConfig;
use warden_dns_domain::{normalize_domain, QueryRecord};

/// Standard DNS UDP datagram size.
const MAX_DATAGRAM_SIZE: usize = 512;

/// The UDP DNS front-end.
///
/// One listener loop dispatches each datagram to its own task, so a slow
/// upstream exchange never head-of-line-blocks other clients. Per query:
/// decode, identify the client, evaluate the per-device policy, synthesize
/// or forward, reply, then record telemetry.
pub struct DnsFrontEnd {
    socket: Arc<UdpSocket>,
    forwarder: UdpForwarder,
    bindings: Arc<ClientBindingCache>,
    policy: Arc<PolicyResolver>,
    /// Swapped atomically by the control plane; read once per query.
    blocking: Arc<ArcSwap<BlockingConfig>>,
    /// Used when the blocking config has no explicit block-page target.
    detected_block_ip: Ipv4Addr,
    telemetry: Arc<TelemetrySink>,
}

impl DnsFrontEnd {
    pub fn new(
        socket: Arc<UdpSocket>,
        forwarder: UdpForwarder,
        bindings: Arc<ClientBindingCache>,
        policy: Arc<PolicyResolver>,
        blocking: Arc<ArcSwap<BlockingConfig>>,
        detected_block_ip: Ipv4Addr,
        telemetry: Arc<TelemetrySink>,
    ) -> Self {
        Self {
            socket,
            forwarder,
            bindings,
            policy,
            blocking,
            detected_block_ip,
            telemetry,
        }
    }

    /// Receive loop. Never returns; runs until the task is dropped.
    pub async fn run(self: Arc<Self>) {
        let mut buf = [0u8; MAX_DATAGRAM_SIZE];
        loop {
            match self.socket.recv_from(&mut buf).await {
                Ok((len, peer)) => {
                    let datagram = buf[..len].to_vec();
                    let this = Arc::clone(&self);
                    tokio::spawn(async move {
                        this.handle_datagram(datagram, peer).await;
                    });
                }
                Err(e) => {
                    warn!(error = %e, "UDP receive failed");
                }
            }
        }
    }

    async fn handle_datagram(&self, datagram: Vec<u8>, peer: SocketAddr) {
        let query = match Message::from_vec(&datagram) {
            Ok(message) => message,
            Err(e) => {
                // Unparseable datagrams are dropped without a reply.
                trace!(peer = %peer, error = %e, "Dropping undecodable datagram");
                return;
            }
        };
        if query.message_type() != MessageType::Query {
            return;
        }

        let client_ip = peer.ip();
        let device = self.bindings.get(client_ip);
        let blocking = self.blocking.load_full();
        let block_ip = blocking.block_page_ip.unwrap_or(self.detected_block_ip);

        // A block on any question answers the whole message immediately.
        for question in query.queries() {
            let name = normalize_domain(&question.name().to_utf8());
            let blocked = self
                .policy
                .evaluate(&name, device.as_deref(), blocking.unknown_device)
                .await;
            if blocked {
                debug!(domain = %name, client = %client_ip, mode = blocking.mode.as_str(), "Query blocked");
                let reply = responder::blocked_reply(&query, question, blocking.mode, block_ip);
                self.send_reply(&reply, peer).await;
                self.telemetry
                    .record(QueryRecord::new(Arc::from(name), client_ip, true));
                return;
            }
        }

        let reply = match self.forwarder.forward(&datagram).await {
            Ok(upstream) => responder::forwarded_reply(&query, &upstream),
            Err(e) => {
                // Observable as an empty answer; the client is never left
                // without a reply because of upstream trouble.
                debug!(error = %e, "Upstream exchange failed; answering empty");
                responder::empty_reply(&query)
            }
        };
        self.send_reply(&reply, peer).await;

        if let Some(question) = query.queries().first() {
            let name = normalize_domain(&question.name().to_utf8());
            self.telemetry
                .record(QueryRecord::new(Arc::from(name), client_ip, false));
        }
    }

    async fn send_reply(&self, reply: &Message, peer: SocketAddr) {
        match reply.to_vec() {
            Ok(bytes) => {
                if let Err(e) = self.socket.send_to(&bytes, peer).await {
                    warn!(peer = %peer, error = %e, "Failed to send DNS reply");
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to encode DNS reply");
            }
        }
    }
}
