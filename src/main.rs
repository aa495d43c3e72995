//! Stakra - design tokens from the command line
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use stakra_design::cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    stakra_core::logging::init(cli.verbose)?;

    if let Err(e) = stakra_design::run(cli) {
        tracing::error!("command failed: {e:?}");
        return Err(e.into());
    }
    Ok(())
}
