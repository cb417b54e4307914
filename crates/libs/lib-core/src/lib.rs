//! # Core Library
//!
//! Configuration and error handling shared by the chat relay crates.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
