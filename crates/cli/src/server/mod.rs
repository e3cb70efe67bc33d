pub mod dns;
pub mod http;

pub use dns::start_dns_server;
pub use http::start_http_server;
