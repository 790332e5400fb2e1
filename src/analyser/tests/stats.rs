use super::{analysed, linear_percentile};
use crate::analyser::*;
use crate::config::AnalysisConfig;
use crate::error::Result;

const FIXED_PRICES: [i64; 30] = [
    35_000, 39_000, 43_000, 52_000, 61_000, 36_500, 41_200, 44_800, 55_300, 63_900, 34_100,
    40_700, 46_000, 50_900, 59_400, 37_800, 38_600, 45_500, 53_700, 64_800, 35_900, 42_300,
    47_100, 56_200, 60_100, 33_800, 39_900, 44_200, 51_600, 95_000,
];

fn fixed_listings() -> Vec<crate::dataset::AnalysedListing> {
    let districts = ["Sultangazi", "Esenler", "Başakşehir", "Bağcılar", "Şişli"];
    FIXED_PRICES
        .iter()
        .enumerate()
        .map(|(i, &price)| analysed(price, districts[i % 5]))
        .collect()
}

#[test]
fn test_price_summary_matches_linear_percentiles() -> Result<()> {
    let frame = listings_to_frame(&fixed_listings())?;
    let summary = price_summary(&frame)?;

    let mut sorted: Vec<f64> = FIXED_PRICES.iter().map(|&p| p as f64).collect();
    sorted.sort_by(f64::total_cmp);

    assert_eq!(summary.count, 30);
    assert!((summary.q1 - linear_percentile(&sorted, 0.25)).abs() < 1e-6);
    assert!((summary.median - linear_percentile(&sorted, 0.5)).abs() < 1e-6);
    assert!((summary.q3 - linear_percentile(&sorted, 0.75)).abs() < 1e-6);
    assert!((summary.min - 33_800.0).abs() < f64::EPSILON);
    assert!((summary.max - 95_000.0).abs() < f64::EPSILON);

    let sum: i64 = FIXED_PRICES.iter().sum();
    assert!((summary.sum - sum as f64).abs() < 1e-6);
    assert!((summary.mean - sum as f64 / 30.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn test_quartiles_of_small_sample() -> Result<()> {
    let rows: Vec<_> = [1, 2, 3, 4].iter().map(|&p| analysed(p, "A")).collect();
    let summary = price_summary(&listings_to_frame(&rows)?)?;
    assert!((summary.q1 - 1.75).abs() < 1e-12);
    assert!((summary.median - 2.5).abs() < 1e-12);
    assert!((summary.q3 - 3.25).abs() < 1e-12);
    assert!((summary.iqr() - 1.5).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_std_dev_uses_sample_formula() -> Result<()> {
    let rows: Vec<_> = [2, 4, 4, 4, 5, 5, 7, 9].iter().map(|&p| analysed(p, "A")).collect();
    let summary = price_summary(&listings_to_frame(&rows)?)?;
    let expected = (32.0_f64 / 7.0).sqrt();
    let std_dev = summary.std_dev.expect("std_dev for 8 values");
    assert!((std_dev - expected).abs() < 1e-9, "got {std_dev}");
    Ok(())
}

#[test]
fn test_empty_table_has_no_summary() -> Result<()> {
    let frame = listings_to_frame(&[])?;
    assert!(price_summary(&frame).is_err());
    Ok(())
}

#[test]
fn test_iqr_bounds_are_inclusive() -> Result<()> {
    let frame = listings_to_frame(&fixed_listings())?;
    let summary = price_summary(&frame)?;
    let bounds = IqrBounds::from_summary(&summary, 1.5);

    assert!((bounds.iqr - (summary.q3 - summary.q1)).abs() < 1e-9);
    assert!((bounds.upper - (summary.q3 + 1.5 * bounds.iqr)).abs() < 1e-9);
    assert!((bounds.lower - (summary.q1 - 1.5 * bounds.iqr)).abs() < 1e-9);

    assert!(bounds.is_outlier(bounds.upper + 0.01));
    assert!(!bounds.is_outlier(bounds.upper));
    assert!(bounds.is_outlier(bounds.lower - 0.01));
    assert!(!bounds.is_outlier(bounds.lower));
    Ok(())
}

#[test]
fn test_detect_outliers_flags_only_extreme_price() -> Result<()> {
    let analysis = analyse(fixed_listings(), &AnalysisConfig::default())?;
    let prices: Vec<i64> = analysis.outliers().map(|(_, l)| l.price()).collect();
    assert_eq!(prices, vec![95_000]);
    assert_eq!(analysis.outlier_rows, vec![29]);
    Ok(())
}

#[test]
fn test_iqr_bounds_by_hand() {
    let bounds = IqrBounds::new(40_000.0, 56_000.0, 1.5);
    assert!((bounds.lower - 16_000.0).abs() < f64::EPSILON);
    assert!((bounds.upper - 80_000.0).abs() < f64::EPSILON);
    assert!(!bounds.is_outlier(80_000.0));
    assert!(bounds.is_outlier(80_000.01));
}

#[test]
fn test_mean_price_by_district() -> Result<()> {
    let rows = vec![analysed(100, "A"), analysed(300, "B"), analysed(200, "A")];
    let means = mean_price_by_district(&listings_to_frame(&rows)?)?;

    assert_eq!(means.len(), 2);
    let a = means.iter().find(|m| m.district == "A").expect("district A");
    let b = means.iter().find(|m| m.district == "B").expect("district B");
    assert!((a.mean_price - 150.0).abs() < f64::EPSILON);
    assert_eq!(a.listings, 2);
    assert!((b.mean_price - 300.0).abs() < f64::EPSILON);
    assert_eq!(b.listings, 1);
    Ok(())
}

#[test]
fn test_district_order_is_first_seen() -> Result<()> {
    let rows = vec![analysed(1, "Şişli"), analysed(2, "Esenler"), analysed(3, "Şişli"), analysed(4, "Bağcılar")];
    let means = mean_price_by_district(&listings_to_frame(&rows)?)?;
    let order: Vec<&str> = means.iter().map(|m| m.district.as_str()).collect();
    assert_eq!(order, vec!["Şişli", "Esenler", "Bağcılar"]);
    Ok(())
}

#[test]
fn test_histogram_covers_every_price() {
    let prices: Vec<f64> = FIXED_PRICES.iter().map(|&p| p as f64).collect();
    let hist = histogram(&prices, 10);
    assert_eq!(hist.bins.len(), 10);
    assert_eq!(hist.total(), 30);
    assert!((hist.bin_width - (95_000.0 - 33_800.0) / 10.0).abs() < 1e-9);
    // the maximum lands in the last, right-closed bin
    assert_eq!(hist.bins.last().map(|b| b.1), Some(1));
}

#[test]
fn test_histogram_single_value() {
    let hist = histogram(&[2.0, 2.0, 2.0], 10);
    assert_eq!(hist.total(), 3);
    assert!((hist.bin_width - 0.1).abs() < 1e-12);
    let populated: Vec<_> = hist.bins.iter().filter(|b| b.1 > 0).collect();
    assert_eq!(populated.len(), 1);
}

#[test]
fn test_histogram_skips_non_finite_and_empty() {
    assert!(histogram(&[], 10).bins.is_empty());
    let hist = histogram(&[1.0, f64::NAN, f64::INFINITY, 3.0], 2);
    assert_eq!(hist.total(), 2);
}
