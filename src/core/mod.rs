//! # Core Module
//!
//! Configuration and calendar helpers shared by the features.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

pub mod clock;
pub mod config;

// Re-export commonly used items
pub use config::Config;
