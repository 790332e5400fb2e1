use serde::{Deserialize, Serialize};

/// A single rental listing as collected, before any cleaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Monthly rent in TL
    pub price: i64,
    pub district: String,
    pub neighborhood: String,
    /// Gross area in m²
    pub brut_m2: i64,
    /// Net livable area in m²
    pub net_m2: i64,
    /// Room spec of the form "A+B"
    pub rooms: String,
    pub building_age: i32,
    pub floor: i32,
    pub total_floors: i32,
    pub heating: String,
    pub bathrooms: i32,
    pub balcony: bool,
    pub elevator: bool,
    pub parking: bool,
    /// Part of a gated site/complex
    pub site: bool,
}

/// A cleaned listing with its derived features appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysedListing {
    #[serde(flatten)]
    pub listing: Listing,
    /// Sum of both parts of the room spec
    pub room_count: u32,
    /// Price divided by net area. Non-finite when `net_m2` is zero.
    pub price_per_m2: f64,
}

impl AnalysedListing {
    pub fn price(&self) -> i64 {
        self.listing.price
    }

    pub fn district(&self) -> &str {
        &self.listing.district
    }
}
