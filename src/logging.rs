//! Logging setup for the binary.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger` once at startup. The default level is `info` and `RUST_LOG`
//! overrides it:
//!
//! ```bash
//! RUST_LOG=debug rent_analysis --seed 7 --no-plots
//! ```
//!
//! Logs go to stderr so they never interleave with the report on stdout.

use crate::error::{RentError, Result};
use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is unset. `eframe`/`egui` internals are
/// kept at `warn` to stop the render loop from flooding the console.
pub const DEFAULT_FILTER: &str = "info,eframe=warn,egui_glow=warn,winit=warn";

/// Initializes the global logger.
///
/// # Errors
///
/// Returns error if a logger has already been installed.
pub fn init() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_timestamp_millis()
        .format_target(true)
        .try_init()
        .map_err(|e| RentError::Config(format!("Failed to initialize logging: {e}")))?;

    log::debug!("Logging initialized");
    Ok(())
}
