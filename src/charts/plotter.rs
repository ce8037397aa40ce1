//! Chart Plotter Module
//! Draws a [`Figure`] into an interactive egui_plot widget.

use crate::charts::figure::{Figure, LegendPosition, Rgb};
use egui::{Color32, RichText};
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};

/// Convert a figure color to egui.
pub fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// egui_plot only anchors legends at corners; centre positions fall back to
/// the corner on the same side.
pub fn legend_corner(position: LegendPosition) -> Corner {
    match position {
        LegendPosition::UpperLeft | LegendPosition::CenterLeft => Corner::LeftTop,
        LegendPosition::UpperRight | LegendPosition::CenterRight | LegendPosition::Best => {
            Corner::RightTop
        }
        LegendPosition::LowerLeft => Corner::LeftBottom,
        LegendPosition::LowerRight => Corner::RightBottom,
    }
}

/// Draws figures with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the whole figure, title included, into the remaining space of `ui`.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        if let Some(title) = &figure.title {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).strong().size(18.0));
            });
        }

        let mut plot = Plot::new("figure").allow_scroll(false);
        if let Some(label) = &figure.x_label {
            plot = plot.x_axis_label(label.clone());
        }
        if let Some(label) = &figure.y_label {
            plot = plot.y_axis_label(label.clone());
        }
        if let Some(position) = figure.resolved_legend() {
            plot = plot.legend(Legend::default().position(legend_corner(position)));
        }

        plot.show(ui, |plot_ui| {
            for (i, series) in figure.series.iter().enumerate() {
                let points: PlotPoints = series.points().map(|(x, y)| [x, y]).collect();
                let name = series
                    .label
                    .clone()
                    .unwrap_or_else(|| format!("series {}", i + 1));
                let color = to_color32(series.color);
                plot_ui.line(Line::new(points).color(color).width(1.5).name(name));
            }
        });
    }
}
