use super::cleaning::parse_room_spec;
use crate::dataset::{AnalysedListing, Listing};
use crate::error::Result;

/// Rent per net square metre. There is no zero guard: a zero net area
/// yields an infinite (or NaN) ratio.
pub fn price_per_m2(price: i64, net_m2: i64) -> f64 {
    price as f64 / net_m2 as f64
}

/// Appends `room_count` and `price_per_m2` to an already cleaned listing.
///
/// # Errors
///
/// Fails when the room spec is malformed.
pub fn derive_features(listing: Listing) -> Result<AnalysedListing> {
    let room_count = parse_room_spec(&listing.rooms)?;
    let price_per_m2 = price_per_m2(listing.price, listing.net_m2);
    Ok(AnalysedListing {
        listing,
        room_count,
        price_per_m2,
    })
}

/// Derives features for the whole table, stopping at the first malformed row.
///
/// # Errors
///
/// Fails when any room spec is malformed.
pub fn derive_all(listings: Vec<Listing>) -> Result<Vec<AnalysedListing>> {
    let analysed = listings
        .into_iter()
        .map(derive_features)
        .collect::<Result<Vec<_>>>()?;

    let non_finite = analysed
        .iter()
        .filter(|l| !l.price_per_m2.is_finite())
        .count();
    if non_finite > 0 {
        log::debug!("{non_finite} listings have a non-finite price_per_m2");
    }
    log::info!("Derived room_count and price_per_m2 for {} listings", analysed.len());
    Ok(analysed)
}
