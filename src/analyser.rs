//! Cleaning, feature derivation and aggregation over the listing table.
//!
//! Stages run in a fixed order, each one a plain function over the table:
//!
//! ```text
//! Vec<Listing> --clean_listings--> Vec<Listing>
//!              --derive_all-----> Vec<AnalysedListing>
//!              --analyse--------> Analysis (frame, summary, groups, outliers, histogram)
//! ```
//!
//! Statistics go through a Polars [`DataFrame`] so quantiles, group-by and
//! CSV output share one representation of the table.

pub mod cleaning;
pub mod features;
pub mod frame;
pub mod grouping;
pub mod histogram;
pub mod outliers;
pub mod stats;
pub mod validation;

pub use cleaning::{clamp_listing, clean_listings, parse_room_spec};
pub use features::{derive_all, derive_features, price_per_m2};
pub use frame::{COLUMNS, frame_to_listings, listings_to_frame};
pub use grouping::{DistrictMean, mean_price_by_district};
pub use histogram::{Histogram, histogram};
pub use outliers::{IqrBounds, detect_outliers};
pub use stats::{PriceSummary, price_summary};
pub use validation::validate_listings;

use crate::config::AnalysisConfig;
use crate::dataset::AnalysedListing;
use crate::error::Result;
use polars::prelude::DataFrame;

/// Everything the reporter, plotter and exporter need from one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub listings: Vec<AnalysedListing>,
    pub frame: DataFrame,
    pub summary: PriceSummary,
    pub districts: Vec<DistrictMean>,
    pub bounds: IqrBounds,
    /// Row indices into `listings`
    pub outlier_rows: Vec<usize>,
    pub price_histogram: Histogram,
}

impl Analysis {
    /// Outlier listings with their row index, in table order.
    pub fn outliers(&self) -> impl Iterator<Item = (usize, &AnalysedListing)> + '_ {
        self.outlier_rows
            .iter()
            .filter_map(|&row| self.listings.get(row).map(|l| (row, l)))
    }

    /// `(net_m2, price)` pairs for the scatter plot.
    pub fn area_price_points(&self) -> Vec<[f64; 2]> {
        self.listings
            .iter()
            .map(|l| [l.listing.net_m2 as f64, l.price() as f64])
            .collect()
    }
}

/// Runs every aggregate over an already cleaned and augmented table.
///
/// # Errors
///
/// Fails if the table is empty or Polars rejects an operation.
pub fn analyse(listings: Vec<AnalysedListing>, config: &AnalysisConfig) -> Result<Analysis> {
    let frame = listings_to_frame(&listings)?;
    let summary = price_summary(&frame)?;
    let districts = mean_price_by_district(&frame)?;
    let bounds = IqrBounds::from_summary(&summary, config.iqr_multiplier);
    let outlier_rows = detect_outliers(&listings, &bounds);

    let prices: Vec<f64> = listings.iter().map(|l| l.price() as f64).collect();
    let price_histogram = histogram(&prices, config.histogram_bins);

    Ok(Analysis {
        listings,
        frame,
        summary,
        districts,
        bounds,
        outlier_rows,
        price_histogram,
    })
}

#[cfg(test)]
mod tests;
