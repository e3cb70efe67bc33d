use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Response shape for a matched query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockingMode {
    /// Synthetic A record pointing at the block page (TTL 60).
    Redirect,
    /// Synthetic A record `0.0.0.0` with TTL 0.
    Null,
    /// RCODE 3, no answer records.
    Nxdomain,
}

impl BlockingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockingMode::Redirect => "redirect",
            BlockingMode::Null => "null",
            BlockingMode::Nxdomain => "nxdomain",
        }
    }
}

impl FromStr for BlockingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "redirect" => Ok(BlockingMode::Redirect),
            "null" => Ok(BlockingMode::Null),
            "nxdomain" => Ok(BlockingMode::Nxdomain),
            other => Err(format!("unknown blocking mode: {other}")),
        }
    }
}

impl Default for BlockingMode {
    fn default() -> Self {
        BlockingMode::Redirect
    }
}

/// What to do when a client IP has no device binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownDevicePolicy {
    /// Block nothing for unbound clients (avoids cross-device contamination).
    NoBlock,
    /// Match against the union of all lists.
    Global,
}

impl Default for UnknownDevicePolicy {
    fn default() -> Self {
        UnknownDevicePolicy::NoBlock
    }
}

/// Blocking behavior of the DNS front-end.
///
/// Swapped atomically at runtime by the control plane; the front-end reads
/// it once per query.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockingConfig {
    #[serde(default)]
    pub mode: BlockingMode,

    /// A-record target for `mode = "redirect"`. When unset, a local address
    /// is auto-detected at startup, falling back to loopback.
    #[serde(default)]
    pub block_page_ip: Option<Ipv4Addr>,

    #[serde(default)]
    pub unknown_device: UnknownDevicePolicy,
}

impl Default for BlockingConfig {
    fn default() -> Self {
        Self {
            mode: BlockingMode::default(),
            block_page_ip: None,
            unknown_device: UnknownDevicePolicy::default(),
        }
    }
}
