//! Service layer module
//!
//! Contains the Nataris HTTP client and the walkthrough driver

pub mod client;
pub mod walkthrough;

pub use client::{NatarisApi, NatarisClient};
pub use walkthrough::run_walkthrough;
