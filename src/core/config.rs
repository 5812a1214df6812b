//! # Configuration
//!
//! Process-wide settings read once from the environment at startup.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::env;

/// Mail relay address (`host:port`). Empty disables notifications.
pub const SMTP_ADDR_VAR: &str = "REMINDER_SMTP_ADDR";
/// Mailbox used as login, sender and recipient.
pub const SMTP_USER_VAR: &str = "REMINDER_SMTP_USER";
pub const SMTP_PASS_VAR: &str = "REMINDER_SMTP_PASS";
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub smtp_addr: String,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub log_level: String,
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(LOG_LEVEL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Config {
            smtp_addr: lookup(SMTP_ADDR_VAR).unwrap_or_default(),
            smtp_user: lookup(SMTP_USER_VAR).unwrap_or_default(),
            smtp_pass: lookup(SMTP_PASS_VAR).unwrap_or_default(),
            log_level,
        }
    }

    /// Whether a mail relay has been configured at all
    pub fn relay_enabled(&self) -> bool {
        !self.smtp_addr.is_empty()
    }
}
