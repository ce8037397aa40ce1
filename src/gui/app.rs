//! Figure Window
//! Native window that displays a single figure until it is closed.

use crate::charts::{ChartPlotter, Figure};
use eframe::egui;
use log::info;

/// Main application window holding one figure.
pub struct FigureApp {
    figure: Figure,
}

impl FigureApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_figure(ui, &self.figure);
        });
    }
}

/// Open a window showing `figure` and block until the user closes it.
pub fn show_figure(figure: Figure) -> eframe::Result<()> {
    let title = figure.title.clone().unwrap_or_else(|| "Figure".to_string());
    info!("Showing '{}' ({} series)", title, figure.series.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title(title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(FigureApp::new(cc, figure)))),
    )
}
