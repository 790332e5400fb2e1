use crate::config::CleaningFloors;
use crate::dataset::Listing;
use crate::error::{RentError, Result};

/// Clamps price, gross area and building age up to their plausible minimums.
/// Every other field passes through untouched.
pub fn clamp_listing(listing: &Listing, floors: &CleaningFloors) -> Listing {
    Listing {
        price: listing.price.max(floors.min_price),
        brut_m2: listing.brut_m2.max(floors.min_brut_m2),
        building_age: listing.building_age.max(floors.min_building_age),
        ..listing.clone()
    }
}

/// Parses a room spec such as `"3+1"` into its total room count.
///
/// # Errors
///
/// Returns [`RentError::InvalidRoomSpec`] unless the spec splits on `+` into
/// exactly two integers whose sum is at least one. Surrounding whitespace is
/// ignored and a signed part is accepted, so `"-1+2"` counts one room.
pub fn parse_room_spec(spec: &str) -> Result<u32> {
    let invalid = || RentError::InvalidRoomSpec {
        spec: spec.to_owned(),
    };

    let mut parts = spec.split('+');
    let (Some(main), Some(extra), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let main: i64 = main.trim().parse().map_err(|_| invalid())?;
    let extra: i64 = extra.trim().parse().map_err(|_| invalid())?;
    let total = main.checked_add(extra).ok_or_else(invalid)?;

    if total < 1 {
        return Err(invalid());
    }
    u32::try_from(total).map_err(|_| invalid())
}

/// Clamps every listing in place.
pub fn clean_listings(listings: &mut [Listing], floors: &CleaningFloors) {
    let mut clamped = 0usize;
    for listing in listings.iter_mut() {
        let cleaned = clamp_listing(listing, floors);
        if cleaned != *listing {
            log::debug!(
                "Clamped listing in {}: price {} -> {}, brut_m2 {} -> {}, age {} -> {}",
                listing.district,
                listing.price,
                cleaned.price,
                listing.brut_m2,
                cleaned.brut_m2,
                listing.building_age,
                cleaned.building_age
            );
            clamped += 1;
        }
        *listing = cleaned;
    }
    log::info!("Cleaned {} listings ({} clamped)", listings.len(), clamped);
}
