//! # Rent Analysis Entry Point
//!
//! ```text
//! main()
//!   │
//!   ├─> Initialize logging (env_logger, RUST_LOG)
//!   ├─> Parse CLI arguments (clap) into an AnalysisConfig
//!   ├─> pipeline::run: build -> clean -> validate -> derive -> analyse -> export
//!   ├─> Print the report to stdout
//!   └─> Unless --no-plots: open the plot window and block until closed
//! ```
//!
//! Any error is fatal: it is logged and the process exits non-zero.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // the report goes to stdout

mod cli;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use rent_analysis::report::Report;
use rent_analysis::{gui, logging, pipeline};

fn main() -> Result<()> {
    logging::init().context("Failed to initialize logging")?;

    let config = cli::Cli::parse().into_config();
    log::debug!("Running with {config:?}");

    let mut rng = pipeline::rng_from_config(&config);
    let outcome = pipeline::run(&config, &mut rng).inspect_err(|e| log::error!("{e}"))?;

    let report = Report::new(&outcome.analysis).render(config.report_format)?;
    println!("{report}");

    if config.show_plots {
        gui::show_plots(&outcome.analysis).inspect_err(|e| log::error!("{e}"))?;
    }

    Ok(())
}
