pub mod device_lists;
pub mod sessions;

pub use device_lists::SqliteDevicePolicyRepository;
pub use sessions::SqliteSessionDirectory;
