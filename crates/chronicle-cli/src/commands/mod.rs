//! Command implementations.

pub mod config;
pub mod enrich;
pub mod visualize;

pub use self::config::execute_config;
pub use self::enrich::execute_enrich;
pub use self::visualize::{execute_visualize, Visualization};
