// Library exports for testing and potential library use

pub mod autosave;
pub mod cli;
pub mod debug;
pub mod launcher;
pub mod store;

pub mod config {
    //! Re-exports from the ada-settings-config crate.
    pub use ada_settings_config::{
        ConfigError, ENV_KEYS, EnvConfig, PersonalizationConfig, defaults, expand_home_dir,
        write_atomic,
    };
}
