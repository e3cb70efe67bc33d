pub mod mock_upstream;
pub mod static_policy;
