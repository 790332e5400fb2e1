//! Console report for a finished analysis.
//!
//! The report is rendered to a `String` so the binary is the only place that
//! touches stdout.

use crate::analyser::{Analysis, DistrictMean, IqrBounds, PriceSummary};
use crate::config::ReportFormat;
use crate::dataset::AnalysedListing;
use crate::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct OutlierRow<'a> {
    row: usize,
    #[serde(flatten)]
    listing: &'a AnalysedListing,
}

/// Borrowed view over the parts of an [`Analysis`] that get reported.
#[derive(Serialize)]
pub struct Report<'a> {
    summary: &'a PriceSummary,
    districts: &'a [DistrictMean],
    bounds: &'a IqrBounds,
    outliers: Vec<OutlierRow<'a>>,
    total_apartments: usize,
}

impl<'a> Report<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        Self {
            summary: &analysis.summary,
            districts: &analysis.districts,
            bounds: &analysis.bounds,
            outliers: analysis
                .outliers()
                .map(|(row, listing)| OutlierRow { row, listing })
                .collect(),
            total_apartments: analysis.listings.len(),
        }
    }

    /// # Errors
    ///
    /// Fails only if JSON serialization fails.
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.summary;
        writeln!(f, "Mean Price: {:.2}", s.mean)?;
        writeln!(f, "Min Price: {:.0}", s.min)?;
        writeln!(f, "Max Price: {:.0}", s.max)?;
        writeln!(f, "Sum Price: {:.0}", s.sum)?;
        writeln!(f)?;

        writeln!(f, "Price statistics")?;
        writeln!(f, "{:<8}{:>14}", "count", s.count)?;
        writeln!(f, "{:<8}{:>14.2}", "mean", s.mean)?;
        match s.std_dev {
            Some(std) => writeln!(f, "{:<8}{:>14.2}", "std", std)?,
            None => writeln!(f, "{:<8}{:>14}", "std", "NaN")?,
        }
        for (label, value) in [
            ("min", s.min),
            ("25%", s.q1),
            ("50%", s.median),
            ("75%", s.q3),
            ("max", s.max),
        ] {
            writeln!(f, "{label:<8}{value:>14.2}")?;
        }
        writeln!(f)?;

        let width = self
            .districts
            .iter()
            .map(|d| d.district.chars().count())
            .max()
            .unwrap_or(0)
            .max("district".len());
        writeln!(f, "Mean price by district")?;
        writeln!(f, "{:<width$}  {:>8}  {:>12}", "district", "listings", "mean_price")?;
        for d in self.districts {
            writeln!(
                f,
                "{:<width$}  {:>8}  {:>12.2}",
                d.district, d.listings, d.mean_price
            )?;
        }
        writeln!(f)?;

        let b = self.bounds;
        writeln!(
            f,
            "IQR: Q1 {:.2}, Q3 {:.2}, IQR {:.2}, bounds [{:.2}, {:.2}]",
            b.q1, b.q3, b.iqr, b.lower, b.upper
        )?;
        writeln!(f, "Detected Outliers:")?;
        if self.outliers.is_empty() {
            writeln!(f, "  none")?;
        } else {
            writeln!(
                f,
                "{:>4}  {:>8}  {:<14}  {:<14}  {:>6}  {:>5}  {:>10}",
                "row", "price", "district", "neighborhood", "net_m2", "rooms", "price/m2"
            )?;
            for OutlierRow { row, listing } in &self.outliers {
                let l = &listing.listing;
                writeln!(
                    f,
                    "{:>4}  {:>8}  {:<14}  {:<14}  {:>6}  {:>5}  {:>10.2}",
                    row, l.price, l.district, l.neighborhood, l.net_m2, l.rooms, listing.price_per_m2
                )?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Total apartments: {}", self.total_apartments)
    }
}
