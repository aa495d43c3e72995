//! Stakra Design CLI Library
//!
//! Command-line front end for the Stakra design system: lists tokens, dumps
//! the composed theme, runs the classifiers and previews the widgets.

pub mod cli;
pub mod commands;

use std::io::Write;

use stakra_core::prelude::*;
use stakra_core::build_theme;

use crate::cli::{Cli, Command};

/// Run a parsed command line, printing its output to stdout.
///
/// Logging must already be initialized.
pub fn run(cli: Cli) -> Result<()> {
    let theme = build_theme();
    debug!(command = ?cli.command, "running");

    if let Command::Preview {
        interactive: true, ..
    } = cli.command
    {
        return stakra_tui::run_interactive(&theme);
    }

    let output = commands::render(&cli.command, &theme)?;
    writeln!(std::io::stdout().lock(), "{output}").context("writing output")?;
    Ok(())
}
