use crate::dataset::{AnalysedListing, Listing};
use crate::error::{RentError, Result};
use polars::prelude::*;

/// Column order of the analysed table, matching the exported header.
pub const COLUMNS: [&str; 17] = [
    "price",
    "district",
    "neighborhood",
    "brut_m2",
    "net_m2",
    "rooms",
    "building_age",
    "floor",
    "total_floors",
    "heating",
    "bathrooms",
    "balcony",
    "elevator",
    "parking",
    "site",
    "room_count",
    "price_per_m2",
];

fn collect<T>(listings: &[AnalysedListing], f: impl Fn(&Listing) -> T) -> Vec<T> {
    listings.iter().map(|l| f(&l.listing)).collect()
}

fn flag(listings: &[AnalysedListing], f: impl Fn(&Listing) -> bool) -> Vec<i32> {
    listings.iter().map(|l| i32::from(f(&l.listing))).collect()
}

/// Builds the analysed table. Amenity flags are stored as 0/1 integers.
///
/// # Errors
///
/// Fails if Polars rejects the columns.
pub fn listings_to_frame(listings: &[AnalysedListing]) -> Result<DataFrame> {
    let df = df!(
        "price" => collect(listings, |l| l.price),
        "district" => collect(listings, |l| l.district.clone()),
        "neighborhood" => collect(listings, |l| l.neighborhood.clone()),
        "brut_m2" => collect(listings, |l| l.brut_m2),
        "net_m2" => collect(listings, |l| l.net_m2),
        "rooms" => collect(listings, |l| l.rooms.clone()),
        "building_age" => collect(listings, |l| l.building_age),
        "floor" => collect(listings, |l| l.floor),
        "total_floors" => collect(listings, |l| l.total_floors),
        "heating" => collect(listings, |l| l.heating.clone()),
        "bathrooms" => collect(listings, |l| l.bathrooms),
        "balcony" => flag(listings, |l| l.balcony),
        "elevator" => flag(listings, |l| l.elevator),
        "parking" => flag(listings, |l| l.parking),
        "site" => flag(listings, |l| l.site),
        "room_count" => listings.iter().map(|l| l.room_count).collect::<Vec<u32>>(),
        "price_per_m2" => listings.iter().map(|l| l.price_per_m2).collect::<Vec<f64>>()
    )?;
    Ok(df)
}

fn missing(name: &str, row: usize) -> RentError {
    RentError::DataProcessing(format!("Missing value in column '{name}' at row {row}"))
}

fn int_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Int64)?;
    series
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| missing(name, row)))
        .collect()
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| missing(name, row)))
        .collect()
}

fn str_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let series = df
        .column(name)?
        .as_materialized_series()
        .cast(&DataType::String)?;
    series
        .str()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.map(str::to_owned).ok_or_else(|| missing(name, row)))
        .collect()
}

fn narrow<T: TryFrom<i64>>(value: i64, name: &str, row: usize) -> Result<T> {
    T::try_from(value).map_err(|_| {
        RentError::DataProcessing(format!("Value {value} out of range in column '{name}' at row {row}"))
    })
}

struct RawColumns {
    ints: Vec<(&'static str, Vec<i64>)>,
    strs: Vec<(&'static str, Vec<String>)>,
    price_per_m2: Vec<f64>,
}

impl RawColumns {
    fn int(&self, name: &str, row: usize) -> Result<i64> {
        self.ints
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, values)| values.get(row).copied())
            .ok_or_else(|| missing(name, row))
    }

    fn text(&self, name: &str, row: usize) -> Result<String> {
        self.strs
            .iter()
            .find(|(n, _)| *n == name)
            .and_then(|(_, values)| values.get(row).cloned())
            .ok_or_else(|| missing(name, row))
    }

    fn row(&self, row: usize) -> Result<AnalysedListing> {
        let int32 = |name: &str| -> Result<i32> { narrow(self.int(name, row)?, name, row) };
        let flag = |name: &str| -> Result<bool> { Ok(self.int(name, row)? != 0) };

        Ok(AnalysedListing {
            listing: Listing {
                price: self.int("price", row)?,
                district: self.text("district", row)?,
                neighborhood: self.text("neighborhood", row)?,
                brut_m2: self.int("brut_m2", row)?,
                net_m2: self.int("net_m2", row)?,
                rooms: self.text("rooms", row)?,
                building_age: int32("building_age")?,
                floor: int32("floor")?,
                total_floors: int32("total_floors")?,
                heating: self.text("heating", row)?,
                bathrooms: int32("bathrooms")?,
                balcony: flag("balcony")?,
                elevator: flag("elevator")?,
                parking: flag("parking")?,
                site: flag("site")?,
            },
            room_count: narrow(self.int("room_count", row)?, "room_count", row)?,
            price_per_m2: self
                .price_per_m2
                .get(row)
                .copied()
                .ok_or_else(|| missing("price_per_m2", row))?,
        })
    }
}

/// Reads an analysed table back into typed listings, coercing integer
/// columns to their listing field types.
///
/// # Errors
///
/// Fails when a column is absent, has nulls, or cannot be coerced.
pub fn frame_to_listings(df: &DataFrame) -> Result<Vec<AnalysedListing>> {
    const INT_COLUMNS: [&str; 12] = [
        "price",
        "brut_m2",
        "net_m2",
        "building_age",
        "floor",
        "total_floors",
        "bathrooms",
        "balcony",
        "elevator",
        "parking",
        "site",
        "room_count",
    ];
    const STR_COLUMNS: [&str; 4] = ["district", "neighborhood", "rooms", "heating"];

    let columns = RawColumns {
        ints: INT_COLUMNS
            .iter()
            .map(|&name| Ok((name, int_column(df, name)?)))
            .collect::<Result<_>>()?,
        strs: STR_COLUMNS
            .iter()
            .map(|&name| Ok((name, str_column(df, name)?)))
            .collect::<Result<_>>()?,
        price_per_m2: float_column(df, "price_per_m2")?,
    };

    (0..df.height()).map(|row| columns.row(row)).collect()
}

/// Prices as `f64`, in table order.
///
/// # Errors
///
/// Fails when the table has no usable `price` column.
pub fn price_values(df: &DataFrame) -> Result<Float64Chunked> {
    let series = df
        .column("price")?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.clone())
}
