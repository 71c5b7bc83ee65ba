//! The configuration store: sole owner of both settings records.
//!
//! Covers:
//! - construction (load both records from a base directory)
//! - per-field setters that notify the autosave timers
//! - debounced autosave (`process_pending_saves`) and exit flush
//! - explicit immediate saves
//! - reset-to-defaults
//!
//! The store is built once at startup and passed to the front-end; there is
//! no ambient global. The front-end reads through the accessors and writes
//! through the setters, never holding references into the records across
//! mutations. All saves happen on the caller's thread.

use crate::autosave::{AutosaveTimer, DEFAULT_AUTOSAVE_DELAY};
use ada_settings_config::{ConfigError, EnvConfig, PersonalizationConfig};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// File names within the base directory.
const ENV_FILE: &str = ".env";
const PERSONALIZATION_FILE: &str = "personalization.json";

pub struct ConfigStore {
    env: EnvConfig,
    personalization: PersonalizationConfig,
    env_path: PathBuf,
    personalization_path: PathBuf,
    // The two records debounce independently: editing one never schedules
    // or restarts a save of the other.
    env_autosave: AutosaveTimer,
    personalization_autosave: AutosaveTimer,
}

impl ConfigStore {
    /// Load both records from `base_dir`.
    ///
    /// Anything absent or unreadable comes back as defaults; `open` cannot
    /// fail.
    pub fn open(base_dir: &Path) -> Self {
        let env_path = base_dir.join(ENV_FILE);
        let personalization_path = base_dir.join(PERSONALIZATION_FILE);
        log::info!("Env file: {:?}", env_path);
        log::info!("Personalization file: {:?}", personalization_path);

        Self {
            env: EnvConfig::load(&env_path),
            personalization: PersonalizationConfig::load(&personalization_path),
            env_path,
            personalization_path,
            env_autosave: AutosaveTimer::new(DEFAULT_AUTOSAVE_DELAY),
            personalization_autosave: AutosaveTimer::new(DEFAULT_AUTOSAVE_DELAY),
        }
    }

    /// Override the autosave quiescence delay.
    pub fn with_autosave_delay(mut self, delay: Duration) -> Self {
        self.env_autosave = AutosaveTimer::new(delay);
        self.personalization_autosave = AutosaveTimer::new(delay);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn env(&self) -> &EnvConfig {
        &self.env
    }

    pub fn personalization(&self) -> &PersonalizationConfig {
        &self.personalization
    }

    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    pub fn personalization_path(&self) -> &Path {
        &self.personalization_path
    }

    // ========================================================================
    // Environment setters
    // ========================================================================
    // Every setter routes through the autosave timer; mutating the records
    // any other way would bypass persistence.

    pub fn set_openai_api_key(&mut self, value: impl Into<String>) {
        self.env.openai_api_key = value.into();
        self.env_autosave.touch();
    }

    pub fn set_personalization_file(&mut self, value: impl Into<String>) {
        self.env.personalization_file = value.into();
        self.env_autosave.touch();
    }

    pub fn set_scratch_pad_dir(&mut self, value: impl Into<String>) {
        self.env.scratch_pad_dir = value.into();
        self.env_autosave.touch();
    }

    pub fn set_active_memory_file(&mut self, value: impl Into<String>) {
        self.env.active_memory_file = value.into();
        self.env_autosave.touch();
    }

    pub fn set_firecrawl_api_key(&mut self, value: impl Into<String>) {
        self.env.firecrawl_api_key = value.into();
        self.env_autosave.touch();
    }

    pub fn set_postgres_url(&mut self, value: impl Into<String>) {
        self.env.postgres_url = value.into();
        self.env_autosave.touch();
    }

    pub fn set_sqlite_url(&mut self, value: impl Into<String>) {
        self.env.sqlite_url = value.into();
        self.env_autosave.touch();
    }

    pub fn set_duckdb_url(&mut self, value: impl Into<String>) {
        self.env.duckdb_url = value.into();
        self.env_autosave.touch();
    }

    /// Set an environment field by its file key (e.g. from the CLI).
    /// Returns `false` for unrecognized keys, in which case nothing changes.
    pub fn set_env_value(&mut self, key: &str, value: &str) -> bool {
        if self.env.set_by_key(key, value) {
            self.env_autosave.touch();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Personalization setters
    // ========================================================================

    pub fn set_browser_urls(&mut self, urls: Vec<String>) {
        self.personalization.browser_urls = urls;
        self.personalization_autosave.touch();
    }

    pub fn set_browser_command(&mut self, value: impl Into<String>) {
        self.personalization.browser_command = value.into();
        self.personalization_autosave.touch();
    }

    pub fn set_ai_assistant_name(&mut self, value: impl Into<String>) {
        self.personalization.ai_assistant_name = value.into();
        self.personalization_autosave.touch();
    }

    pub fn set_human_name(&mut self, value: impl Into<String>) {
        self.personalization.human_name = value.into();
        self.personalization_autosave.touch();
    }

    pub fn set_sql_dialect(&mut self, value: impl Into<String>) {
        self.personalization.sql_dialect = value.into();
        self.personalization_autosave.touch();
    }

    pub fn set_system_message_suffix(&mut self, value: impl Into<String>) {
        self.personalization.system_message_suffix = value.into();
        self.personalization_autosave.touch();
    }

    // ========================================================================
    // Saving
    // ========================================================================

    /// Save the env record immediately.
    ///
    /// Does not touch the debounce state: a pending autosave still fires on
    /// its own schedule.
    pub fn save_env(&self) -> Result<(), ConfigError> {
        self.env.save(&self.env_path)
    }

    /// Save the personalization record immediately. Debounce state is left
    /// alone, as with [`save_env`](Self::save_env).
    pub fn save_personalization(&self) -> Result<(), ConfigError> {
        self.personalization.save(&self.personalization_path)
    }

    /// Perform any autosave whose channel has been quiescent for the full
    /// delay. Call periodically from the front-end loop (e.g. once per
    /// frame or tick).
    ///
    /// At most one save per channel per call. Write failures are logged and
    /// the pending flag is cleared; the in-memory record is untouched and
    /// the next mutation or an explicit save retries. Returns the number of
    /// saves performed.
    pub fn process_pending_saves(&mut self) -> usize {
        let now = Instant::now();
        let mut saved = 0;

        if self.env_autosave.take_due(now) {
            saved += 1;
            match self.save_env() {
                Ok(()) => log::debug!("Autosaved env settings"),
                Err(e) => log::error!("Autosave of {:?} failed: {}", self.env_path, e),
            }
        }

        if self.personalization_autosave.take_due(now) {
            saved += 1;
            match self.save_personalization() {
                Ok(()) => log::debug!("Autosaved personalization settings"),
                Err(e) => {
                    log::error!("Autosave of {:?} failed: {}", self.personalization_path, e)
                }
            }
        }

        saved
    }

    /// Save anything still pending, regardless of the debounce clock.
    ///
    /// Called on exit so an edit made moments before quitting is not lost
    /// inside the debounce window.
    pub fn flush_pending_saves(&mut self) {
        if self.env_autosave.take_pending() {
            match self.save_env() {
                Ok(()) => log::debug!("Flushed pending env settings"),
                Err(e) => log::error!("Flush of {:?} failed: {}", self.env_path, e),
            }
        }
        if self.personalization_autosave.take_pending() {
            match self.save_personalization() {
                Ok(()) => log::debug!("Flushed pending personalization settings"),
                Err(e) => log::error!("Flush of {:?} failed: {}", self.personalization_path, e),
            }
        }
    }

    /// Reset both records to the hardcoded defaults and write both files
    /// synchronously, bypassing the debounce.
    ///
    /// Pending debounce state is cleared (the data just hit disk). Write
    /// failures are logged and non-fatal; the in-memory reset sticks.
    pub fn reset_to_defaults(&mut self) {
        self.env = EnvConfig::default();
        self.personalization = PersonalizationConfig::default();
        self.env_autosave.clear();
        self.personalization_autosave.clear();

        if let Err(e) = self.save_env() {
            log::error!("Failed to save {:?} after reset: {}", self.env_path, e);
        }
        if let Err(e) = self.save_personalization() {
            log::error!(
                "Failed to save {:?} after reset: {}",
                self.personalization_path,
                e
            );
        }
        log::info!("Settings reset to defaults");
    }
}

impl Drop for ConfigStore {
    fn drop(&mut self) {
        // An edit still inside the debounce window must reach disk before
        // the store goes away.
        self.flush_pending_saves();
    }
}
