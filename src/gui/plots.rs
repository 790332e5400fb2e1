use crate::analyser::Histogram;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, MarkerShape, Plot, Points};

pub const HISTOGRAM_TITLE: &str = "Rental Price Distribution";
pub const SCATTER_TITLE: &str = "Price vs Net Area";

const PRICE_AXIS: &str = "Price (TL)";
const COUNT_AXIS: &str = "Number of Apartments";
const AREA_AXIS: &str = "Net m²";

const BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(86, 140, 200);
const OUTLIER_COLOR: egui::Color32 = egui::Color32::from_rgb(230, 90, 80);

pub fn histogram_bars(hist: &Histogram) -> Vec<Bar> {
    hist.bins
        .iter()
        .map(|&(centre, count)| {
            Bar::new(centre, count as f64)
                .width(hist.bin_width)
                .stroke(egui::Stroke::new(0.5, egui::Color32::from_gray(40)))
        })
        .collect()
}

pub fn render_price_histogram(ui: &mut egui::Ui, hist: &Histogram) {
    if hist.bins.is_empty() {
        ui.label("No prices to plot");
        return;
    }

    let chart = BarChart::new("Apartments", histogram_bars(hist))
        .color(BAR_COLOR)
        .element_formatter(Box::new(|bar, _| {
            format!("Price: {:.0}\nApartments: {}", bar.argument, bar.value)
        }));

    Plot::new("price_histogram")
        .x_axis_label(PRICE_AXIS)
        .y_axis_label(COUNT_AXIS)
        .include_y(0.0)
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

/// Scatter of `(net_m2, price)`; outliers are drawn as a second series.
pub fn render_price_vs_area(ui: &mut egui::Ui, points: &[[f64; 2]], outliers: &[[f64; 2]]) {
    let listings = Points::new("Listings", points.to_vec())
        .radius(4.0)
        .color(BAR_COLOR);
    let flagged = Points::new("IQR outliers", outliers.to_vec())
        .radius(6.0)
        .shape(MarkerShape::Diamond)
        .color(OUTLIER_COLOR);

    Plot::new("price_vs_area")
        .x_axis_label(AREA_AXIS)
        .y_axis_label(PRICE_AXIS)
        .legend(Legend::default())
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.points(listings);
            if !outliers.is_empty() {
                plot_ui.points(flagged);
            }
        });
}
