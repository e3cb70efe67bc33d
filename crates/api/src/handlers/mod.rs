pub mod config;
pub mod lists;
pub mod telemetry;

pub use config::{get_config, update_config};
pub use lists::{
    append_list, create_list, delete_list, list_items, list_overview, reload_lists, remove_item,
    replace_list, validate_source,
};
pub use telemetry::{analytics, delete_logs, get_logs};
