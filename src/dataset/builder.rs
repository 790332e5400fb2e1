use super::listing::Listing;
use crate::config::JitterRanges;
use crate::error::{RentError, Result};
use rand::Rng;

#[expect(clippy::too_many_arguments)]
fn template(
    price: i64,
    district: &str,
    neighborhood: &str,
    (brut_m2, net_m2): (i64, i64),
    rooms: &str,
    building_age: i32,
    (floor, total_floors): (i32, i32),
    heating: &str,
    bathrooms: i32,
    [balcony, elevator, parking, site]: [bool; 4],
) -> Listing {
    Listing {
        price,
        district: district.to_owned(),
        neighborhood: neighborhood.to_owned(),
        brut_m2,
        net_m2,
        rooms: rooms.to_owned(),
        building_age,
        floor,
        total_floors,
        heating: heating.to_owned(),
        bathrooms,
        balcony,
        elevator,
        parking,
        site,
    }
}

/// The five hand-collected listings every synthesized row is derived from.
pub fn templates() -> Vec<Listing> {
    vec![
        template(43_000, "Sultangazi", "Cebeci", (100, 90), "2+1", 5, (5, 12), "Central", 1, [true, true, true, true]),
        template(39_000, "Esenler", "Tuna", (95, 85), "2+1", 7, (3, 10), "Central", 1, [true, true, false, true]),
        template(52_000, "Başakşehir", "Kayabaşı", (120, 105), "3+1", 4, (7, 14), "Central", 2, [true, true, true, true]),
        template(35_000, "Bağcılar", "Güneşli", (90, 80), "2+1", 10, (2, 8), "Natural Gas", 1, [false, false, false, false]),
        template(61_000, "Şişli", "Mecidiyeköy", (110, 100), "3+1", 6, (6, 12), "Central", 2, [true, true, true, true]),
    ]
}

/// Copies `template` and shifts price, gross area and building age by
/// independent uniform draws from `ranges`. Draw order is price, area, age.
pub fn jitter<R: Rng + ?Sized>(template: &Listing, ranges: &JitterRanges, rng: &mut R) -> Listing {
    let mut listing = template.clone();
    listing.price += rng.gen_range(ranges.price.clone());
    listing.brut_m2 += rng.gen_range(ranges.brut_m2.clone());
    listing.building_age += rng.gen_range(ranges.building_age.clone());
    listing
}

/// Builds a dataset of exactly `target_count` listings: the templates first,
/// then jittered copies of `templates[i % 5]` until the target is reached.
///
/// # Errors
///
/// Returns [`RentError::Config`] when any jitter range is empty.
pub fn build_dataset<R: Rng + ?Sized>(
    rng: &mut R,
    ranges: &JitterRanges,
    target_count: usize,
) -> Result<Vec<Listing>> {
    if ranges.price.is_empty() || ranges.brut_m2.is_empty() || ranges.building_age.is_empty() {
        return Err(RentError::Config(format!("Jitter ranges must not be empty: {ranges:?}")));
    }

    let base = templates();
    let mut listings: Vec<Listing> = base.iter().take(target_count).cloned().collect();

    while listings.len() < target_count {
        let Some(source) = base.get(listings.len() % base.len()) else {
            break;
        };
        let next = jitter(source, ranges, rng);
        log::debug!(
            "Synthesized listing {} from {} (price {})",
            listings.len(),
            source.district,
            next.price
        );
        listings.push(next);
    }

    log::info!("Built dataset with {} listings", listings.len());
    Ok(listings)
}
