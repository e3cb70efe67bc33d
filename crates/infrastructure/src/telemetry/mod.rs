pub mod log_writer;
pub mod sink;

pub use sink::TelemetrySink;
