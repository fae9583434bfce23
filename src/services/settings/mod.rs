// Settings service module
// Loads and saves planner.toml

mod service;

pub use service::{resolve_database_path, SettingsService};
