//! skillsmp - browse, search and run a curated catalog of agent skills

pub mod catalog;
pub mod commands;
pub mod config;
pub mod db;
pub mod debounce;
pub mod filter;
pub mod grid;
pub mod logging;
pub mod models;
pub mod navigation;
pub mod selection;
pub mod tui;

pub use catalog::Catalog;
pub use config::SkillsConfig;
pub use db::Database;
pub use filter::{PageMarker, View, compute_view, filter_skills};
pub use grid::Grid;
pub use models::{Category, Skill};
