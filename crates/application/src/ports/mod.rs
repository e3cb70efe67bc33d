pub mod device_policy;
pub mod filter_index;
pub mod list_store;
pub mod session_directory;

pub use device_policy::DevicePolicyRepository;
pub use filter_index::FilterIndexPort;
pub use list_store::{ListPage, ListStorePort, SourcePreview};
pub use session_directory::{SessionDirectory, SessionIdentity};
