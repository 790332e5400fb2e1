use super::frame::price_values;
use crate::error::{RentError, Result};
use polars::prelude::*;
use serde::Serialize;

/// Headline price figures plus a `describe()`-style summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    /// Sample standard deviation (one delta degree of freedom)
    pub std_dev: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl PriceSummary {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

fn required<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| RentError::DataProcessing(format!("Cannot compute {what} of an empty price column")))
}

/// Linearly interpolated quantile of `ca`, `q` in `[0, 1]`.
///
/// # Errors
///
/// Fails for an out-of-range `q` or an empty column.
pub fn quantile(ca: &Float64Chunked, q: f64) -> Result<f64> {
    required(ca.quantile(q, QuantileMethod::Linear)?, "quantile")
}

/// Summarises the `price` column of the analysed table.
///
/// # Errors
///
/// Fails when the table has no prices.
pub fn price_summary(df: &DataFrame) -> Result<PriceSummary> {
    let ca = price_values(df)?;
    let count = ca.len() - ca.null_count();
    if count == 0 {
        return Err(RentError::DataProcessing("No prices to summarise".to_owned()));
    }

    let summary = PriceSummary {
        count,
        sum: ca.sum().unwrap_or(0.0),
        mean: required(ca.mean(), "mean")?,
        std_dev: ca.std(1),
        min: required(ca.min(), "min")?,
        q1: quantile(&ca, 0.25)?,
        median: required(ca.median(), "median")?,
        q3: quantile(&ca, 0.75)?,
        max: required(ca.max(), "max")?,
    };
    log::info!(
        "Price summary over {} listings: mean {:.2}, median {:.2}",
        summary.count,
        summary.mean,
        summary.median
    );
    Ok(summary)
}
