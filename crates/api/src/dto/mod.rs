pub mod config;
pub mod lists;
pub mod logs;

pub use config::{BlockingView, UpdateBlockingRequest};
pub use lists::{
    AppendRequest, CreateListRequest, ItemsQuery, ItemsResponse, RemoveDomainRequest,
    ReplaceRequest, ValidateRequest, ValidateResponse,
};
pub use logs::LogsQuery;
