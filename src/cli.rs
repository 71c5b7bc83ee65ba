//! Command-line interface for ada-settings.
//!
//! This module handles argument parsing and command dispatch. Mutating
//! commands go through the store's setters (the same path a form UI would
//! use), so persistence is the store's business: the exit flush writes
//! whatever is still inside the debounce window before the process ends.

use crate::launcher::AssistantLauncher;
use crate::store::ConfigStore;
use ada_settings_config::{ENV_KEYS, expand_home_dir};
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// ada-settings - settings editor for the Ada realtime assistant
#[derive(Parser)]
#[command(name = "ada-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding .env and personalization.json (default: current directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub dir: Option<PathBuf>,

    /// Log verbosity override (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current settings (the default when no command is given)
    Show,

    /// Set an environment setting by its file key (e.g. OPENAI_API_KEY)
    SetEnv {
        /// File key, one of the keys written to .env
        key: String,
        /// New value, stored verbatim
        value: String,
    },

    /// Set a personalization field by its JSON name
    SetPref {
        /// Field name (browser_urls takes a comma-separated list)
        field: String,
        /// New value
        value: String,
    },

    /// Reset every setting to the built-in defaults and save both files
    Reset,

    /// Launch the assistant process
    Launch {
        /// Initial prompt passed to the assistant
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,
    },
}

/// Dispatch the parsed command against a store opened on the configured
/// base directory.
pub fn run(cli: Cli) -> Result<()> {
    let base_dir = match &cli.dir {
        Some(dir) => PathBuf::from(expand_home_dir(&dir.to_string_lossy())),
        None => PathBuf::from("."),
    };
    let mut store = ConfigStore::open(&base_dir);

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => print_settings(&store),
        Commands::SetEnv { key, value } => {
            if !store.set_env_value(&key, &value) {
                anyhow::bail!(
                    "unrecognized env key '{}' (expected one of: {})",
                    key,
                    ENV_KEYS.join(", ")
                );
            }
            store.flush_pending_saves();
            println!("{key} updated");
        }
        Commands::SetPref { field, value } => {
            apply_pref(&mut store, &field, &value)?;
            store.flush_pending_saves();
            println!("{field} updated");
        }
        Commands::Reset => {
            store.reset_to_defaults();
            println!("Settings reset to defaults");
        }
        Commands::Launch { prompt } => {
            let launcher = AssistantLauncher::default();
            if !launcher.launch(prompt.as_deref()) {
                anyhow::bail!("failed to launch the assistant process");
            }
            println!("Assistant launched");
        }
    }

    Ok(())
}

/// Route a personalization field name to the matching typed setter.
fn apply_pref(store: &mut ConfigStore, field: &str, value: &str) -> Result<()> {
    match field {
        "browser_urls" => store.set_browser_urls(
            value
                .split(',')
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty())
                .collect(),
        ),
        "browser_command" => store.set_browser_command(value),
        "ai_assistant_name" => store.set_ai_assistant_name(value),
        "human_name" => store.set_human_name(value),
        "sql_dialect" => store.set_sql_dialect(value),
        "system_message_suffix" => store.set_system_message_suffix(value),
        other => anyhow::bail!(
            "unrecognized personalization field '{other}' (expected one of: \
             browser_urls, browser_command, ai_assistant_name, human_name, \
             sql_dialect, system_message_suffix)"
        ),
    }
    Ok(())
}

fn print_settings(store: &ConfigStore) {
    println!("Environment ({}):", store.env_path().display());
    for (key, value) in store.env().entries() {
        println!("  {key}={value}");
    }

    let prefs = store.personalization();
    println!();
    println!(
        "Personalization ({}):",
        store.personalization_path().display()
    );
    println!("  browser_urls: {}", prefs.browser_urls.join(", "));
    println!("  browser_command: {}", prefs.browser_command);
    println!("  ai_assistant_name: {}", prefs.ai_assistant_name);
    println!("  human_name: {}", prefs.human_name);
    println!("  sql_dialect: {}", prefs.sql_dialect);
    println!("  system_message_suffix: {}", prefs.system_message_suffix);
}
