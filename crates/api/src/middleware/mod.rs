pub mod auth;

pub use auth::{is_read_only_method, session_auth, AuthContext};
