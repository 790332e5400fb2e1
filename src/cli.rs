use clap::{Parser, ValueEnum};
use rent_analysis::config::{AnalysisConfig, DEFAULT_EXPORT_PATH, ReportFormat, ValidationMode};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "rent_analysis",
    about = "Rental price analysis of 30 Istanbul apartments",
    version
)]
pub struct Cli {
    /// Seed for the dataset jitter. Without it every run differs.
    #[arg(long, env = "RENT_ANALYSIS_SEED")]
    pub seed: Option<u64>,

    /// Where to write the cleaned table (overwritten if present)
    #[arg(short, long, default_value = DEFAULT_EXPORT_PATH)]
    pub output: PathBuf,

    /// Skip the plot window
    #[arg(long)]
    pub no_plots: bool,

    /// Fail on listings with zero net area, impossible floors or unknown heating
    #[arg(long)]
    pub strict: bool,

    /// Console report format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

impl Cli {
    /// Overlays the flags onto the default configuration.
    pub fn into_config(self) -> AnalysisConfig {
        AnalysisConfig {
            seed: self.seed,
            export_path: self.output,
            show_plots: !self.no_plots,
            validation: if self.strict {
                ValidationMode::Strict
            } else {
                ValidationMode::Warn
            },
            report_format: match self.format {
                FormatArg::Text => ReportFormat::Text,
                FormatArg::Json => ReportFormat::Json,
            },
            ..AnalysisConfig::default()
        }
    }
}
