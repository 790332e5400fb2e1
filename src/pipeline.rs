//! The end-to-end analysis run.
//!
//! ```text
//! build_dataset -> clean_listings -> validate_listings -> derive_all -> analyse -> export_csv
//! ```
//!
//! Reporting and plotting are left to the caller, which receives the
//! finished [`Analysis`].

use crate::analyser::{Analysis, analyse, clean_listings, derive_all, validate_listings};
use crate::config::AnalysisConfig;
use crate::dataset::build_dataset;
use crate::error::Result;
use crate::export::export_csv;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng as _};
use std::path::PathBuf;

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub analysis: Analysis,
    /// Issues found by validation; empty in strict mode, which fails instead
    pub validation_issues: Vec<String>,
    pub export_path: PathBuf,
}

/// Random source for the dataset jitter: seeded when the config carries a
/// seed, otherwise drawn from OS entropy.
pub fn rng_from_config(config: &AnalysisConfig) -> StdRng {
    match config.seed {
        Some(seed) => {
            log::info!("Using fixed seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    }
}

/// Builds, cleans, augments, analyses and exports the dataset.
///
/// # Errors
///
/// Any stage failure aborts the whole run: a malformed room spec, a
/// validation issue in strict mode, a Polars failure or an export I/O error.
pub fn run<R: Rng + ?Sized>(config: &AnalysisConfig, rng: &mut R) -> Result<PipelineOutcome> {
    let mut listings = build_dataset(rng, &config.jitter, config.target_count)?;
    clean_listings(&mut listings, &config.floors);
    let validation_issues = validate_listings(&listings, config.validation)?;

    let analysed = derive_all(listings)?;
    let analysis = analyse(analysed, config)?;
    export_csv(&analysis.frame, &config.export_path)?;

    Ok(PipelineOutcome {
        analysis,
        validation_issues,
        export_path: config.export_path.clone(),
    })
}
