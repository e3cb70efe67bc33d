//! Warden DNS Control Plane
//!
//! Loopback HTTP API for managing lists, inspecting telemetry, and swapping
//! runtime blocking behavior. JSON in, JSON or short text out.
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_api_routes;
pub use state::AppState;
