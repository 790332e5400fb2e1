use super::stats::PriceSummary;
use crate::dataset::AnalysedListing;
use serde::Serialize;

/// Tukey fences derived from the interquartile range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrBounds {
    /// Fences at `q1 - k·IQR` and `q3 + k·IQR`.
    pub fn new(q1: f64, q3: f64, multiplier: f64) -> Self {
        let iqr = q3 - q1;
        Self {
            q1,
            q3,
            iqr,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        }
    }

    pub fn from_summary(summary: &PriceSummary, multiplier: f64) -> Self {
        Self::new(summary.q1, summary.q3, multiplier)
    }

    /// Bounds are inclusive: only values strictly outside are outliers.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Row indices of listings whose price falls strictly outside `bounds`,
/// in table order.
pub fn detect_outliers(listings: &[AnalysedListing], bounds: &IqrBounds) -> Vec<usize> {
    let outliers: Vec<usize> = listings
        .iter()
        .enumerate()
        .filter(|(_, l)| bounds.is_outlier(l.price() as f64))
        .map(|(row, _)| row)
        .collect();
    log::info!(
        "IQR bounds [{:.2}, {:.2}] flag {} of {} listings",
        bounds.lower,
        bounds.upper,
        outliers.len(),
        listings.len()
    );
    outliers
}
