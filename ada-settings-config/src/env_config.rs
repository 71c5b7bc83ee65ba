//! Environment-style settings backed by a flat `.env` file.
//!
//! Covers:
//! - the `EnvConfig` record (8 fixed keys)
//! - line-oriented parse (split on the first `=` only, unknown keys skipped)
//! - fixed-order serialization and atomic save

use crate::defaults;
use crate::error::ConfigError;
use crate::persistence::write_atomic;
use std::fs;
use std::path::Path;

/// The recognized file keys, in the order they are written.
pub const ENV_KEYS: [&str; 8] = [
    "OPENAI_API_KEY",
    "PERSONALIZATION_FILE",
    "SCRATCH_PAD_DIR",
    "ACTIVE_MEMORY_FILE",
    "FIRECRAWL_API_KEY",
    "POSTGRES_URL",
    "SQLITE_URL",
    "DUCKDB_URL",
];

/// Environment-style settings for the assistant process.
///
/// All fields are plain strings stored verbatim (no trimming or quoting).
/// Values may contain `=`. A value containing a newline breaks the line
/// structure on the next load; this is a known round-trip limitation of the
/// format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub openai_api_key: String,
    pub personalization_file: String,
    pub scratch_pad_dir: String,
    pub active_memory_file: String,
    pub firecrawl_api_key: String,
    pub postgres_url: String,
    pub sqlite_url: String,
    pub duckdb_url: String,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            openai_api_key: defaults::empty(),
            personalization_file: defaults::personalization_file(),
            scratch_pad_dir: defaults::scratch_pad_dir(),
            active_memory_file: defaults::active_memory_file(),
            firecrawl_api_key: defaults::empty(),
            postgres_url: defaults::empty(),
            sqlite_url: defaults::sqlite_url(),
            duckdb_url: defaults::duckdb_url(),
        }
    }
}

impl EnvConfig {
    /// Load the record from `path`, or build it from defaults.
    ///
    /// An absent file is not an error. Read failures (e.g. permissions) are
    /// logged and leave the defaults in place; the caller always receives a
    /// fully populated record.
    pub fn load(path: &Path) -> Self {
        let mut config = Self::default();

        if !path.exists() {
            log::info!("Env file not found at {:?}, using defaults", path);
            return config;
        }

        match fs::read_to_string(path) {
            Ok(contents) => config.apply_lines(&contents),
            Err(e) => log::warn!("Failed to read env file {:?}: {}", path, e),
        }

        config
    }

    /// Write the record to `path` atomically.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        write_atomic(path, &self.to_file_string())
    }

    /// Assign recognized `KEY=VALUE` lines onto `self`.
    ///
    /// Each line is split on the first `=` only, so values may themselves
    /// contain `=`. Lines without a `=` and unrecognized keys are silently
    /// skipped.
    fn apply_lines(&mut self, contents: &str) {
        for line in contents.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            if !self.set_by_key(key, value) {
                log::debug!("Skipping unrecognized env key {:?}", key);
            }
        }
    }

    /// Set a field by its file key. Returns `false` for unrecognized keys.
    pub fn set_by_key(&mut self, key: &str, value: &str) -> bool {
        match key {
            "OPENAI_API_KEY" => self.openai_api_key = value.to_string(),
            "PERSONALIZATION_FILE" => self.personalization_file = value.to_string(),
            "SCRATCH_PAD_DIR" => self.scratch_pad_dir = value.to_string(),
            "ACTIVE_MEMORY_FILE" => self.active_memory_file = value.to_string(),
            "FIRECRAWL_API_KEY" => self.firecrawl_api_key = value.to_string(),
            "POSTGRES_URL" => self.postgres_url = value.to_string(),
            "SQLITE_URL" => self.sqlite_url = value.to_string(),
            "DUCKDB_URL" => self.duckdb_url = value.to_string(),
            _ => return false,
        }
        true
    }

    /// Key/value pairs in file order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("OPENAI_API_KEY", self.openai_api_key.as_str()),
            ("PERSONALIZATION_FILE", self.personalization_file.as_str()),
            ("SCRATCH_PAD_DIR", self.scratch_pad_dir.as_str()),
            ("ACTIVE_MEMORY_FILE", self.active_memory_file.as_str()),
            ("FIRECRAWL_API_KEY", self.firecrawl_api_key.as_str()),
            ("POSTGRES_URL", self.postgres_url.as_str()),
            ("SQLITE_URL", self.sqlite_url.as_str()),
            ("DUCKDB_URL", self.duckdb_url.as_str()),
        ]
    }

    /// Serialize the 8 keys in fixed order as `KEY=VALUE` lines.
    fn to_file_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.entries() {
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_env_defaults() {
        let config = EnvConfig::default();
        assert_eq!(config.openai_api_key, "");
        assert_eq!(config.personalization_file, "./personalization.json");
        assert_eq!(config.scratch_pad_dir, "./scratchpad");
        assert_eq!(config.active_memory_file, "./active_memory.json");
        assert_eq!(config.firecrawl_api_key, "");
        assert_eq!(config.postgres_url, "");
        assert_eq!(config.sqlite_url, "./db/mock_sqlite.db");
        assert_eq!(config.duckdb_url, "./db/mock_duck.duckdb");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        let config = EnvConfig::load(&path);
        assert_eq!(config, EnvConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        let mut config = EnvConfig::default();
        config.openai_api_key = "sk-test-123".to_string();
        config.postgres_url = "postgres://user:pw@localhost/db?opt=1".to_string();
        config.scratch_pad_dir = "/tmp/pad".to_string();

        config.save(&path).expect("save should succeed");
        let loaded = EnvConfig::load(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_round_trip_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        let config = EnvConfig::default();
        config.save(&path).expect("save should succeed");
        assert_eq!(EnvConfig::load(&path), config);
    }

    #[test]
    fn test_value_may_contain_equals() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        std::fs::write(&path, "POSTGRES_URL=postgres://h/db?a=1&b=2\n").unwrap();
        let config = EnvConfig::load(&path);
        assert_eq!(config.postgres_url, "postgres://h/db?a=1&b=2");
    }

    #[test]
    fn test_unrecognized_keys_and_bad_lines_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        std::fs::write(
            &path,
            "SOME_FUTURE_KEY=value\nnot a key value line\nOPENAI_API_KEY=sk-x\n",
        )
        .unwrap();

        let config = EnvConfig::load(&path);
        assert_eq!(config.openai_api_key, "sk-x");
        // Everything else stays at defaults.
        assert_eq!(config.scratch_pad_dir, "./scratchpad");
    }

    #[test]
    fn test_empty_value_assigned_verbatim() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        std::fs::write(&path, "SCRATCH_PAD_DIR=\n").unwrap();
        let config = EnvConfig::load(&path);
        assert_eq!(config.scratch_pad_dir, "");
    }

    #[test]
    fn test_values_not_trimmed() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        std::fs::write(&path, "OPENAI_API_KEY= spaced \n").unwrap();
        let config = EnvConfig::load(&path);
        assert_eq!(config.openai_api_key, " spaced ");
    }

    #[test]
    fn test_fixed_key_order_on_save() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        EnvConfig::default().save(&path).expect("save should succeed");
        let contents = std::fs::read_to_string(&path).unwrap();
        let keys: Vec<&str> = contents
            .lines()
            .map(|l| l.split_once('=').unwrap().0)
            .collect();
        assert_eq!(keys, ENV_KEYS);
    }

    #[test]
    fn test_save_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(".env");

        let mut config = EnvConfig::default();
        config.firecrawl_api_key = "fc-key".to_string();

        config.save(&path).expect("save should succeed");
        let first = std::fs::read(&path).unwrap();
        config.save(&path).expect("save should succeed");
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_by_key_rejects_unknown() {
        let mut config = EnvConfig::default();
        assert!(config.set_by_key("OPENAI_API_KEY", "sk-a"));
        assert!(!config.set_by_key("NOT_A_KEY", "x"));
        assert_eq!(config.openai_api_key, "sk-a");
    }
}
