//! Configuration for Warden DNS, organized by concern:
//! - `root`: top-level config, file loading, CLI overrides
//! - `server`: bind addresses
//! - `upstream`: upstream resolver and forwarding timeout
//! - `blocking`: blocking mode, block-page target, unknown-device policy
//! - `lists`: list directory and fetch limits
//! - `telemetry`: recent-query ring and durable log
//! - `logging`: log level
//! - `errors`: configuration errors

pub mod blocking;
pub mod errors;
pub mod lists;
pub mod logging;
pub mod root;
pub mod server;
pub mod telemetry;
pub mod upstream;

pub use blocking::{BlockingConfig, BlockingMode, UnknownDevicePolicy};
pub use errors::ConfigError;
pub use lists::ListsConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use telemetry::TelemetryConfig;
pub use upstream::UpstreamConfig;
