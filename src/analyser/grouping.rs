use crate::error::{RentError, Result};
use polars::prelude::*;
use serde::Serialize;

/// Mean price of one district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictMean {
    pub district: String,
    pub listings: usize,
    pub mean_price: f64,
}

/// Mean `price` per `district`, in the order districts first appear.
///
/// # Errors
///
/// Fails when either column is missing or has an unexpected type.
pub fn mean_price_by_district(df: &DataFrame) -> Result<Vec<DistrictMean>> {
    let grouped = df
        .clone()
        .lazy()
        .group_by_stable([col("district")])
        .agg([
            col("price").cast(DataType::Float64).mean().alias("mean_price"),
            col("price").count().cast(DataType::Int64).alias("listings"),
        ])
        .collect()?;

    let districts = grouped.column("district")?.as_materialized_series().clone();
    let means = grouped.column("mean_price")?.as_materialized_series().clone();
    let counts = grouped.column("listings")?.as_materialized_series().clone();

    let rows = districts
        .str()?
        .into_iter()
        .zip(means.f64()?)
        .zip(counts.i64()?)
        .map(|((district, mean), count)| match (district, mean, count) {
            (Some(district), Some(mean_price), Some(count)) => Ok(DistrictMean {
                district: district.to_owned(),
                listings: usize::try_from(count).unwrap_or(0),
                mean_price,
            }),
            _ => Err(RentError::DataProcessing(
                "Null district or price in group aggregate".to_owned(),
            )),
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!("Computed mean price for {} districts", rows.len());
    Ok(rows)
}
