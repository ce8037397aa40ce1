//! Static Chart Renderer
//! Writes figures to PNG files with plotters.
//!
//! Layout of a line chart:
//! 1. Optional caption centered on top
//! 2. Cartesian area padded 5% beyond the data bounds
//! 3. Axis descriptions below / left of the mesh
//! 4. Legend box anchored per [`LegendPosition`]

use crate::charts::figure::{Figure, LegendPosition, Rgb};
use crate::charts::histogram::ScatterHist;
use log::{debug, info};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

const FONT: &str = "sans-serif";
const CAPTION_SIZE: u32 = 28;
const AXIS_DESC_SIZE: u32 = 18;
const LINE_WIDTH: u32 = 2;
const POINT_SIZE: i32 = 3;
const HIST_FILL: RGBColor = RGBColor(31, 119, 180);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to render {path}: {message}")]
    Draw { path: PathBuf, message: String },
}

fn to_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn to_label_position(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight | LegendPosition::Best => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        LegendPosition::CenterLeft => SeriesLabelPosition::MiddleLeft,
        LegendPosition::CenterRight => SeriesLabelPosition::MiddleRight,
    }
}

/// Pad a range by 5% on each side.
fn padded(min: f64, max: f64) -> std::ops::Range<f64> {
    let pad = (max - min) * 0.05;
    (min - pad)..(max + pad)
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render `figure` to a PNG at `path`.
    pub fn save(figure: &Figure, path: &Path, size: (u32, u32)) -> Result<(), RenderError> {
        let draw_err = |e: &dyn std::fmt::Display| RenderError::Draw {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_err(&e))?;

        let (x_min, x_max, y_min, y_max) = figure.bounds();

        let mut builder = ChartBuilder::on(&root);
        builder
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60);
        if let Some(title) = &figure.title {
            builder.caption(title, (FONT, CAPTION_SIZE));
        }
        let mut chart = builder
            .build_cartesian_2d(padded(x_min, x_max), padded(y_min, y_max))
            .map_err(|e| draw_err(&e))?;

        {
            let mut mesh = chart.configure_mesh();
            mesh.axis_desc_style((FONT, AXIS_DESC_SIZE));
            if let Some(label) = &figure.x_label {
                mesh.x_desc(label);
            }
            if let Some(label) = &figure.y_label {
                mesh.y_desc(label);
            }
            mesh.draw().map_err(|e| draw_err(&e))?;
        }

        for series in &figure.series {
            let color = to_color(series.color);
            let anno = chart
                .draw_series(LineSeries::new(
                    series.points(),
                    color.stroke_width(LINE_WIDTH),
                ))
                .map_err(|e| draw_err(&e))?;

            if let Some(label) = &series.label {
                anno.label(label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
                });
            }
            debug!(
                "Drew series {:?} ({} points, {})",
                series.label,
                series.len(),
                series.color
            );
        }

        if let Some(position) = figure.resolved_legend() {
            chart
                .configure_series_labels()
                .position(to_label_position(position))
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(|e| draw_err(&e))?;
        }

        root.present().map_err(|e| draw_err(&e))?;
        info!("Saved {}", path.display());
        Ok(())
    }

    /// Render a scatter plot with the x histogram on top and the y histogram,
    /// horizontal, on the right. The marginal plots hide their shared-axis labels.
    pub fn save_scatter_hist(
        data: &ScatterHist,
        path: &Path,
        size: (u32, u32),
    ) -> Result<(), RenderError> {
        let draw_err = |e: &dyn std::fmt::Display| RenderError::Draw {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let root = BitMapBackend::new(path, size).into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_err(&e))?;

        let split_x = (size.0 * 3 / 4) as i32;
        let split_y = (size.1 / 4) as i32;
        let areas = root.split_by_breakpoints([split_x], [split_y]);
        let (hist_x_area, scatter_area, hist_y_area) = (&areas[0], &areas[2], &areas[3]);

        let lim = data.limit();
        let top = data.max_count().max(1) as f64 * 1.05;
        let no_label = |_: &f64| String::new();

        let mut scatter = ChartBuilder::on(scatter_area)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(-lim..lim, -lim..lim)
            .map_err(|e| draw_err(&e))?;
        scatter.configure_mesh().draw().map_err(|e| draw_err(&e))?;
        scatter
            .draw_series(
                data.x
                    .iter()
                    .zip(&data.y)
                    .map(|(&x, &y)| Circle::new((x, y), POINT_SIZE, HIST_FILL.filled())),
            )
            .map_err(|e| draw_err(&e))?;

        let mut hist_x = ChartBuilder::on(hist_x_area)
            .margin(10)
            .x_label_area_size(10)
            .y_label_area_size(50)
            .build_cartesian_2d(-lim..lim, 0.0..top)
            .map_err(|e| draw_err(&e))?;
        hist_x
            .configure_mesh()
            .x_label_formatter(&no_label)
            .draw()
            .map_err(|e| draw_err(&e))?;
        hist_x
            .draw_series(data.edges.windows(2).zip(&data.x_counts).map(|(edge, &count)| {
                Rectangle::new([(edge[0], 0.0), (edge[1], count as f64)], HIST_FILL.filled())
            }))
            .map_err(|e| draw_err(&e))?;

        let mut hist_y = ChartBuilder::on(hist_y_area)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(10)
            .build_cartesian_2d(0.0..top, -lim..lim)
            .map_err(|e| draw_err(&e))?;
        hist_y
            .configure_mesh()
            .y_label_formatter(&no_label)
            .draw()
            .map_err(|e| draw_err(&e))?;
        hist_y
            .draw_series(data.edges.windows(2).zip(&data.y_counts).map(|(edge, &count)| {
                Rectangle::new([(0.0, edge[0]), (count as f64, edge[1])], HIST_FILL.filled())
            }))
            .map_err(|e| draw_err(&e))?;

        root.present().map_err(|e| draw_err(&e))?;
        info!("Saved {}", path.display());
        Ok(())
    }
}
