#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Answer returned by the mock for every A question.
pub const MOCK_UPSTREAM_IP: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

/// Minimal upstream resolver for tests: answers every query with one A
/// record per question, preserving the transaction id.
pub struct MockUpstream {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockUpstream {
    pub async fn start() -> std::io::Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = [0u8; 512];
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if let Some(response) = Self::build_response(&buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(query: &[u8]) -> Option<Vec<u8>> {
        let query = Message::from_vec(query).ok()?;

        let mut response = Message::new();
        response.set_id(query.id());
        response.set_message_type(MessageType::Response);
        response.set_recursion_desired(query.recursion_desired());
        response.set_recursion_available(true);
        for question in query.queries() {
            response.add_query(question.clone());
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                300,
                RData::A(A::from(MOCK_UPSTREAM_IP)),
            ));
        }
        response.to_vec().ok()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
