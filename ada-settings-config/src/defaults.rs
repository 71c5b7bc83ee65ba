//! Default values for both settings records.
//!
//! Kept as free functions (rather than literals scattered through struct
//! impls) so `Default` and reset-to-defaults share one source of truth.

// ── Environment settings ───────────────────────────────────────────────────

pub fn empty() -> String {
    String::new()
}

pub fn personalization_file() -> String {
    "./personalization.json".to_string()
}

pub fn scratch_pad_dir() -> String {
    "./scratchpad".to_string()
}

pub fn active_memory_file() -> String {
    "./active_memory.json".to_string()
}

pub fn sqlite_url() -> String {
    "./db/mock_sqlite.db".to_string()
}

pub fn duckdb_url() -> String {
    "./db/mock_duck.duckdb".to_string()
}

// ── Personalization ────────────────────────────────────────────────────────

pub fn browser_urls() -> Vec<String> {
    vec![
        "https://google.com".to_string(),
        "https://chat.openai.com".to_string(),
        "https://claude.ai/chat".to_string(),
    ]
}

pub fn browser_command() -> String {
    "open -a 'Google Chrome'".to_string()
}

pub fn ai_assistant_name() -> String {
    "Ada".to_string()
}

pub fn human_name() -> String {
    "User".to_string()
}

pub fn sql_dialect() -> String {
    "duckdb".to_string()
}

pub fn system_message_suffix() -> String {
    "Keep all of your responses ultra short.".to_string()
}
