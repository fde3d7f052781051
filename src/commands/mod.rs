//! CLI command implementations

mod catalog;
mod config;
mod likes;

pub use catalog::{cmd_categories, cmd_list, cmd_run, cmd_show, cmd_stats, cmd_tags};
pub use config::{cmd_config_init, cmd_config_path, cmd_config_show};
pub use likes::{cmd_like, cmd_likes};
