//! File-based logging backend.
//!
//! Routes all `log::info!()` etc. to `ada_settings_debug.log` in the
//! system temp directory, keeping diagnostic output away from the
//! settings text the binary prints on stdout. Controlled by the
//! `DEBUG_LEVEL` environment variable:
//!
//! - 0 or unset: logging off
//! - 1: errors only
//! - 2: info level
//! - 3: debug level
//! - 4: trace level
//!
//! A CLI `--log-level` flag takes precedence over `DEBUG_LEVEL`, and also
//! mirrors output to stderr (as does setting `RUST_LOG`).

use log::{LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Mutex, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

struct FileLogger {
    file: Option<Mutex<std::fs::File>>,
    mirror_stderr: bool,
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // Level filtering is handled globally via log::set_max_level.
        true
    }

    fn log(&self, record: &Record) {
        let line = format!(
            "[{}] [{:5}] [{}] {}\n",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = &self.file
            && let Ok(mut f) = file.lock()
        {
            let _ = f.write_all(line.as_bytes());
            let _ = f.flush();
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();

fn timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn level_from_env() -> LevelFilter {
    match std::env::var("DEBUG_LEVEL")
        .ok()
        .and_then(|v| v.trim().parse::<u8>().ok())
    {
        None | Some(0) => LevelFilter::Off,
        Some(1) => LevelFilter::Error,
        Some(2) => LevelFilter::Info,
        Some(3) => LevelFilter::Debug,
        Some(_) => LevelFilter::Trace,
    }
}

/// Initialize logging. `override_level` (from the CLI) takes precedence
/// over the `DEBUG_LEVEL` environment variable.
pub fn init_logging(override_level: Option<LevelFilter>) {
    let level = override_level.unwrap_or_else(level_from_env);
    if level == LevelFilter::Off {
        return;
    }

    let log_path = std::env::temp_dir().join("ada_settings_debug.log");
    // Silently run without a file if it can't be opened; the mirror (if
    // any) still works.
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    let logger = LOGGER.get_or_init(|| FileLogger {
        file: file.map(Mutex::new),
        mirror_stderr: override_level.is_some() || std::env::var_os("RUST_LOG").is_some(),
    });

    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
