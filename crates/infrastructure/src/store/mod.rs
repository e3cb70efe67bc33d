pub mod fetch;
pub mod file_store;
pub mod snapshot;

pub use file_store::FileListStore;
pub use snapshot::{ListSnapshot, ListView};
