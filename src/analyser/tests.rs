#![expect(clippy::unwrap_used, clippy::indexing_slicing)]

mod stats;

use crate::analyser::derive_features;
use crate::dataset::{AnalysedListing, Listing};

/// A plausible listing that every check accepts, for tests to tweak.
pub(super) fn listing(price: i64, district: &str, rooms: &str, net_m2: i64) -> Listing {
    Listing {
        price,
        district: district.to_owned(),
        neighborhood: "Merkez".to_owned(),
        brut_m2: net_m2 + 10,
        net_m2,
        rooms: rooms.to_owned(),
        building_age: 5,
        floor: 2,
        total_floors: 6,
        heating: "Central".to_owned(),
        bathrooms: 1,
        balcony: true,
        elevator: false,
        parking: true,
        site: false,
    }
}

pub(super) fn analysed(price: i64, district: &str) -> AnalysedListing {
    derive_features(listing(price, district, "2+1", 100)).unwrap()
}

/// Numpy/pandas "linear" percentile over a sorted slice.
pub(super) fn linear_percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
}
