//! # Feature: Manifest
//!
//! JSON manifest of dated events. Loading is all-or-nothing: a missing,
//! unreadable or malformed file aborts the run.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//! - **Toggleable**: false

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// A titled occurrence on a calendar date
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Event {
    #[serde(default)]
    pub title: String,

    /// Calendar date as written in the manifest (`YYYY-MM-DD`)
    #[serde(default)]
    pub time: String,
}

impl Event {
    pub fn new(title: impl Into<String>, time: impl Into<String>) -> Self {
        Event {
            title: title.into(),
            time: time.into(),
        }
    }
}

/// Root of the manifest file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "skip_null_events")]
    pub events: Vec<Event>,
}

/// `null` array entries carry no event; drop them instead of failing the load.
fn skip_null_events<'de, D>(deserializer: D) -> std::result::Result<Vec<Event>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Option<Event>>> = Option::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default().into_iter().flatten().collect())
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        let manifest = Self::from_slice(&contents)
            .with_context(|| format!("parse manifest {}", path.display()))?;
        debug!(
            "Loaded {} event(s) from {}",
            manifest.events.len(),
            path.display()
        );
        Ok(manifest)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
