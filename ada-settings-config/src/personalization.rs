//! Assistant personalization preferences backed by a JSON document.

use crate::defaults;
use crate::error::ConfigError;
use crate::persistence::write_atomic;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Personalization preferences for the assistant.
///
/// Field order here is the on-disk key order; keep the two in sync so saved
/// files stay diff-friendly.
///
/// Decoding is strict: a document missing any field is rejected as a whole
/// and replaced with defaults. A partially populated record is never
/// produced. Unknown keys in the document are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizationConfig {
    /// Ordered list of URLs for the browser shortcuts; insertion order is
    /// preserved through the round-trip.
    pub browser_urls: Vec<String>,
    /// Shell command used to open the browser.
    pub browser_command: String,
    /// Name the assistant goes by.
    pub ai_assistant_name: String,
    /// Name the assistant addresses the user with.
    pub human_name: String,
    /// One of `duckdb`, `sqlite`, `postgres` by convention; not enforced.
    pub sql_dialect: String,
    /// Free text appended to the assistant's system message.
    pub system_message_suffix: String,
}

impl Default for PersonalizationConfig {
    fn default() -> Self {
        Self {
            browser_urls: defaults::browser_urls(),
            browser_command: defaults::browser_command(),
            ai_assistant_name: defaults::ai_assistant_name(),
            human_name: defaults::human_name(),
            sql_dialect: defaults::sql_dialect(),
            system_message_suffix: defaults::system_message_suffix(),
        }
    }
}

impl PersonalizationConfig {
    /// Load the record from `path`, or build it from defaults.
    ///
    /// An absent file, a read failure, invalid JSON, and a document missing
    /// required fields all yield the full default record; failures are
    /// logged, never returned.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Personalization file not found at {:?}, using defaults", path);
            return Self::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Failed to read personalization file {:?}: {}", path, e);
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Failed to decode personalization file {:?}: {}; using defaults",
                    path,
                    e
                );
                Self::default()
            }
        }
    }

    /// Write the record to `path` atomically as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, &json)
    }
}
