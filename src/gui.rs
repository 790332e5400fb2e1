//! Static plot window shown at the end of a run.
//!
//! One native window holds two figures, the price histogram and the
//! price/area scatter. The call blocks until the window is closed.

pub mod plots;

use crate::analyser::{Analysis, Histogram};
use crate::error::Result;
use eframe::egui;

const WINDOW_TITLE: &str = "Istanbul Rent Analysis";

/// Owned plot data, so the app does not borrow from the analysis.
pub struct PlotApp {
    histogram: Histogram,
    points: Vec<[f64; 2]>,
    outliers: Vec<[f64; 2]>,
}

impl PlotApp {
    pub fn new(analysis: &Analysis) -> Self {
        let points = analysis.area_price_points();
        let outliers = analysis
            .outlier_rows
            .iter()
            .filter_map(|&row| points.get(row).copied())
            .collect();
        Self {
            histogram: analysis.price_histogram.clone(),
            points,
            outliers,
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label("Close this window to finish the run.");
        });

        egui::Window::new(plots::HISTOGRAM_TITLE)
            .default_pos([16.0, 40.0])
            .default_size([520.0, 400.0])
            .show(ctx, |ui| plots::render_price_histogram(ui, &self.histogram));

        egui::Window::new(plots::SCATTER_TITLE)
            .default_pos([560.0, 40.0])
            .default_size([520.0, 400.0])
            .show(ctx, |ui| {
                plots::render_price_vs_area(ui, &self.points, &self.outliers);
            });
    }
}

/// Opens the plot window and blocks until it is closed.
///
/// # Errors
///
/// Fails when no display is available or the renderer cannot start.
pub fn show_plots(analysis: &Analysis) -> Result<()> {
    let app = PlotApp::new(analysis);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 500.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    log::info!("Opening plot window");
    eframe::run_native(WINDOW_TITLE, options, Box::new(|_cc| Ok(Box::new(app))))?;
    log::info!("Plot window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyser::{analyse, derive_features};
    use crate::config::AnalysisConfig;
    use crate::dataset::templates;

    #[test]
    fn test_plot_app_marks_outlier_points() {
        let mut rows: Vec<_> = templates()
            .into_iter()
            .map(|l| derive_features(l).expect("templates parse"))
            .collect();
        let mut extra = rows.first().cloned().expect("template exists");
        extra.listing.price = 400_000;
        rows.push(extra);

        let analysis = analyse(rows, &AnalysisConfig::default()).expect("analysis succeeds");
        let app = PlotApp::new(&analysis);

        assert_eq!(app.points.len(), 6);
        assert_eq!(app.outliers, vec![[90.0, 400_000.0]]);
        assert_eq!(app.histogram.total(), 6);
    }

    #[test]
    fn test_histogram_bars_match_bins() {
        let hist = crate::analyser::histogram(&[1.0, 2.0, 2.0, 3.0], 3);
        let bars = plots::histogram_bars(&hist);
        assert_eq!(bars.len(), 3);
        let heights: Vec<f64> = bars.iter().map(|b| b.value).collect();
        assert_eq!(heights, vec![1.0, 2.0, 1.0]);
    }
}
