use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;

/// Default location of the exported table, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "istanbul_rent_analysis.csv";

/// How listing-level validation issues are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Log each issue and keep going.
    #[default]
    Warn,
    /// Collect every issue, then fail the run if there were any.
    Strict,
}

/// Console report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Jitter applied to each synthesized listing, as half-open integer ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JitterRanges {
    pub price: Range<i64>,
    pub brut_m2: Range<i64>,
    pub building_age: Range<i32>,
}

impl Default for JitterRanges {
    fn default() -> Self {
        Self {
            price: -3000..5000,
            brut_m2: -5..10,
            building_age: -1..2,
        }
    }
}

/// Lower clamps applied by the cleaner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningFloors {
    pub min_price: i64,
    pub min_brut_m2: i64,
    pub min_building_age: i32,
}

impl Default for CleaningFloors {
    fn default() -> Self {
        Self {
            min_price: 15_000,
            min_brut_m2: 50,
            min_building_age: 0,
        }
    }
}

/// Every tunable of a run. `Default` reproduces the fixed constants of the
/// original analysis; the CLI only overlays a few of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of listings in the synthesized dataset
    pub target_count: usize,
    pub jitter: JitterRanges,
    pub floors: CleaningFloors,
    /// Equal-width bins of the price histogram
    pub histogram_bins: usize,
    /// Multiplier applied to the IQR to get the outlier fences
    pub iqr_multiplier: f64,
    pub export_path: PathBuf,
    /// Open the plot window after the report is printed
    pub show_plots: bool,
    pub validation: ValidationMode,
    pub report_format: ReportFormat,
    /// Seed for the dataset jitter. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            target_count: 30,
            jitter: JitterRanges::default(),
            floors: CleaningFloors::default(),
            histogram_bins: 10,
            iqr_multiplier: 1.5,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            show_plots: true,
            validation: ValidationMode::Warn,
            report_format: ReportFormat::Text,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_constants() {
        let config = AnalysisConfig::default();
        assert_eq!(config.target_count, 30);
        assert_eq!(config.floors.min_price, 15_000);
        assert_eq!(config.floors.min_brut_m2, 50);
        assert_eq!(config.floors.min_building_age, 0);
        assert_eq!(config.jitter.price, -3000..5000);
        assert_eq!(config.histogram_bins, 10);
        assert!((config.iqr_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.export_path, PathBuf::from("istanbul_rent_analysis.csv"));
        assert_eq!(config.validation, ValidationMode::Warn);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_serializes() {
        let json = serde_json::to_string(&AnalysisConfig::default()).expect("serialize config");
        assert!(json.contains("\"validation\":\"warn\""), "got: {json}");
    }
}
