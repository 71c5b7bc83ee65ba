use ada_settings::cli::{self, Cli};
use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Parse CLI arguments first (before logging init for cleaner output)
    let cli = Cli::parse();

    // Route log::info!() etc. to the debug log file; --log-level takes
    // precedence over the DEBUG_LEVEL environment variable.
    ada_settings::debug::init_logging(cli.log_level);

    log::info!("Starting ada-settings");

    let result = cli::run(cli);
    if let Err(ref e) = result {
        eprintln!("ada-settings: error: {e:#}");
    }
    // Return the original error so main exits with code 1 (anyhow default)
    result
}
