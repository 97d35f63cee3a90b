//! Nataris API Example Library
//!
//! Typed client for the Nataris inference API and a walkthrough that
//! exercises each endpoint in turn

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use services::{run_walkthrough, NatarisApi, NatarisClient};
pub use utils::error::{NatarisError, NatarisResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
