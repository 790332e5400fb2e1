//! # Rent Analysis - Istanbul rental listings
//!
//! A single-pass exploratory analysis over a small inline dataset of rental
//! apartments: synthesize the dataset, clean it, derive features, summarise
//! prices, flag outliers with the IQR rule, plot, and export to CSV.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rent_analysis::config::AnalysisConfig;
//! use rent_analysis::pipeline;
//!
//! let config = AnalysisConfig {
//!     seed: Some(7),
//!     show_plots: false,
//!     ..AnalysisConfig::default()
//! };
//! let outcome = pipeline::run(&config, &mut pipeline::rng_from_config(&config))?;
//! println!("{} outliers", outcome.analysis.outlier_rows.len());
//! # Ok::<(), rent_analysis::error::RentError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`dataset`]: Listing types, templates and the jittered dataset builder
//! - [`analyser`]: Cleaning, feature derivation, statistics, grouping, outliers
//! - [`export`]: CSV export and re-import
//! - [`report`]: Console report (text or JSON)
//! - [`gui`]: Histogram and scatter plot window
//! - [`pipeline`]: The end-to-end run
//! - [`config`]: Run configuration and its defaults
//! - [`error`]: Error types and handling utilities
//! - [`logging`]: Logger setup for the binary
//!
//! ## Reproducibility
//!
//! The only randomness is the dataset jitter, and the random source is always
//! passed in. Seed a [`rand::rngs::StdRng`] (or set `seed` in the config) to
//! get the same 30 rows on every run.

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod gui;
pub mod logging;
pub mod pipeline;
pub mod report;
