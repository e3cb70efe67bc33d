//! Warden DNS Infrastructure Layer
//!
//! Concrete implementations of the application ports: the compiled pattern
//! index, the file-backed list store, the UDP DNS front-end, the telemetry
//! sink, and the SQLite-backed policy/session adapters.
pub mod dns;
pub mod filter;
pub mod policy;
pub mod store;
pub mod telemetry;

pub use dns::{DnsFrontEnd, UdpForwarder};
pub use filter::PatternIndex;
pub use policy::{SqliteDevicePolicyRepository, SqliteSessionDirectory};
pub use store::{FileListStore, ListSnapshot};
pub use telemetry::TelemetrySink;
