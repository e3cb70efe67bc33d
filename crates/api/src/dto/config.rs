use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use warden_dns_domain::config::{BlockingConfig, BlockingMode, UnknownDevicePolicy};

#[derive(Serialize, Debug)]
pub struct BlockingView {
    pub mode: BlockingMode,
    pub block_page_ip: Option<Ipv4Addr>,
    pub unknown_device: UnknownDevicePolicy,
}

impl From<&BlockingConfig> for BlockingView {
    fn from(config: &BlockingConfig) -> Self {
        Self {
            mode: config.mode,
            block_page_ip: config.block_page_ip,
            unknown_device: config.unknown_device,
        }
    }
}

/// Partial update; absent fields keep their current values.
#[derive(Deserialize, Debug)]
pub struct UpdateBlockingRequest {
    pub mode: Option<BlockingMode>,
    pub block_page_ip: Option<Ipv4Addr>,
    pub unknown_device: Option<UnknownDevicePolicy>,
}
