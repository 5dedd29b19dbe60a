//! Qualia CLI
//!
//! Comments or uncomments qualified blocks in config files according to the
//! active qualities.

mod cli;
mod commands;
mod error;
mod logging;

use std::io::{self, Write};

use clap::Parser;
use colored::Colorize;

use qualia_blocks::Qualifier;
use qualia_fs::QualiaConfig;

use cli::{Cli, Mode};
use commands::Source;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        // A closed pipe (e.g. `qualia | head`) is not worth reporting
        if matches!(&e, CliError::Io(io_err) if io_err.kind() == io::ErrorKind::BrokenPipe) {
            return;
        }
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }

    let qualifier = build_qualifier(&cli)?;
    tracing::debug!(qualities = ?qualifier.qualities(), "Active qualities");

    let sources = Source::from_files(&cli.files);
    let mut stdout = io::stdout().lock();

    match cli.mode() {
        Mode::Print => commands::run_print(&qualifier, &sources, &mut stdout),
        Mode::InPlace => {
            let changed = commands::run_in_place(&qualifier, &cli.files)?;
            if cli.verbose {
                for path in &changed {
                    writeln!(stdout, "{} {}", "updated".green(), path.display())?;
                }
            }
            Ok(())
        }
        Mode::Check => commands::run_check(&qualifier, &sources, &mut stdout),
        Mode::List => commands::run_list(&qualifier, &sources, &mut stdout),
    }
}

/// Combine command-line qualities with those from the config file.
fn build_qualifier(cli: &Cli) -> Result<Qualifier> {
    let mut qualities = cli.qualities.clone();
    if let Some(path) = &cli.config {
        let config = QualiaConfig::load(path)?;
        tracing::debug!(path = %path.display(), count = config.qualities.len(), "Loaded qualities from config");
        qualities.extend(config.qualities);
    }
    Ok(Qualifier::new(qualities))
}
