//! Configuration records and persistence for ada-settings.
//!
//! This crate owns the two on-disk settings documents of the assistant and
//! nothing else. It includes:
//!
//! - `EnvConfig`: environment-style settings backed by a flat `KEY=VALUE`
//!   text file
//! - `PersonalizationConfig`: assistant personalization preferences backed
//!   by a JSON document
//! - Hardcoded default values for both records
//! - Atomic file writes and path expansion helpers
//!
//! Loading is infallible by design: an absent or unreadable file yields a
//! fully populated record built from defaults. Saving reports failures to
//! the caller so the application layer can log and keep the in-memory state.

pub mod defaults;
pub mod env_config;
pub mod error;
pub mod persistence;
pub mod personalization;

// Re-export main types for convenience
pub use env_config::{ENV_KEYS, EnvConfig};
pub use error::ConfigError;
pub use persistence::{expand_home_dir, write_atomic};
pub use personalization::PersonalizationConfig;
