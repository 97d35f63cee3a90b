//! Configuration management module
//!
//! Responsible for loading the API credential, base URL and logging options from environment variables and `.env` files

pub mod settings;

pub use settings::Settings;
