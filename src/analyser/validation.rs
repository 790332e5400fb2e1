//! Checks for fields the cleaner deliberately leaves alone.
//!
//! Net area, floor counts and heating type are passed through unchanged by
//! the cleaner. This module only reports problems with them; whether a
//! problem is fatal is decided by [`ValidationMode`].

use crate::config::ValidationMode;
use crate::dataset::Listing;
use crate::error::{RentError, Result};

/// Heating types seen on the listing site.
pub const KNOWN_HEATING: &[&str] = &[
    "Central",
    "Natural Gas",
    "Combi",
    "Stove",
    "Floor Heating",
    "None",
];

/// Returns one human-readable message per problem found in `listing`.
pub fn listing_issues(listing: &Listing) -> Vec<String> {
    let mut issues = Vec::new();

    if listing.net_m2 <= 0 {
        issues.push(format!("net_m2 is {}, price_per_m2 will be undefined", listing.net_m2));
    }
    if listing.total_floors <= 0 {
        issues.push(format!("total_floors is {}", listing.total_floors));
    } else if listing.floor > listing.total_floors {
        issues.push(format!(
            "floor {} is above total_floors {}",
            listing.floor, listing.total_floors
        ));
    }
    if !KNOWN_HEATING.contains(&listing.heating.as_str()) {
        issues.push(format!("unknown heating type '{}'", listing.heating));
    }

    issues
}

/// Inspects every listing. In [`ValidationMode::Warn`] issues are logged and
/// returned; in [`ValidationMode::Strict`] any issue fails the run.
///
/// # Errors
///
/// Returns [`RentError::Validation`] in strict mode when at least one issue
/// is found.
pub fn validate_listings(listings: &[Listing], mode: ValidationMode) -> Result<Vec<String>> {
    let issues: Vec<String> = listings
        .iter()
        .enumerate()
        .flat_map(|(row, listing)| {
            listing_issues(listing)
                .into_iter()
                .map(move |issue| format!("row {row} ({}): {issue}", listing.district))
        })
        .collect();

    match mode {
        ValidationMode::Strict if !issues.is_empty() => Err(RentError::Validation(issues)),
        ValidationMode::Strict | ValidationMode::Warn => {
            for issue in &issues {
                log::warn!("{issue}");
            }
            Ok(issues)
        }
    }
}
