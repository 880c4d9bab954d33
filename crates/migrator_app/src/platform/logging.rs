//! Logging setup for the harness binary.
use log::LevelFilter;
use migrator_logging::LogDestination;

use super::cli::Cli;

pub fn initialize(cli: &Cli) {
    migrator_logging::initialize(destination(cli), level(cli));
}

fn destination(cli: &Cli) -> LogDestination {
    match &cli.log_file {
        Some(path) => LogDestination::Both(path.clone()),
        None => LogDestination::Terminal,
    }
}

fn level(cli: &Cli) -> LevelFilter {
    if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
