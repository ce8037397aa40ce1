//! Experiment figures: throughput, queue length (Figure 1), queue length CDF
//! (Figure 13) and the scatter/histogram combo.

use anyhow::{anyhow, Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::charts::figure::{Figure, LegendPosition, Rgb, SeriesOptions, RED};
use crate::charts::histogram::ScatterHist;
use crate::charts::renderer::StaticChartRenderer;
use crate::config::{InputFile, PlotConfig, FIG_13_COLORS, THROUGHPUT_DEGREE, THROUGHPUT_WINDOW};
use crate::data::{DataProcessor, Table};
use crate::gui;

fn load(file: &InputFile) -> Result<Table> {
    file.load()
        .with_context(|| format!("loading {}", file.path.display()))
}

/// Both throughput traces, smoothed, as lines on one figure.
pub fn throughput_figure(config: &PlotConfig) -> Result<Figure> {
    let mut figure = Figure::new();
    for file in [&config.throughput_first, &config.throughput_second] {
        let table = load(file)?;
        let seconds = table.column("seconds")?;
        let smoothed = DataProcessor::smooth(
            &table.column("throughput")?,
            THROUGHPUT_WINDOW,
            THROUGHPUT_DEGREE,
        )
        .with_context(|| format!("smoothing {}", file.path.display()))?;
        figure = figure.plot(&seconds, &smoothed, SeriesOptions::default());
    }
    Ok(figure)
}

/// Show the smoothed throughput traces in a window. Nothing is written to disk.
pub fn plot_throughput(config: &PlotConfig) -> Result<()> {
    let figure = throughput_figure(config)?;
    gui::show_figure(figure).map_err(|e| anyhow!("failed to display throughput figure: {e}"))
}

/// Queue length over time for TCP and DCTCP.
pub fn queue_size_figure(config: &PlotConfig) -> Result<Figure> {
    let tcp = load(&config.fig_1_tcp)?;
    let dctcp = load(&config.fig_1_dctcp)?;

    Ok(Figure::new()
        .plot(
            &tcp.column("seconds")?,
            &tcp.column("queue_length")?,
            SeriesOptions::default().label("tcp"),
        )
        .plot(
            &dctcp.column("seconds")?,
            &dctcp.column("queue_length")?,
            SeriesOptions::default().color(RED).label("dctcp"),
        )
        .x_label("Time (seconds)")
        .y_label("Queue Length in packets")
        .title("Figure 1, DCTCP vs TCP queue length")
        .legend(LegendPosition::CenterLeft))
}

/// Render Figure 1 and return the written path.
pub fn plot_queue_size_fig_1(config: &PlotConfig) -> Result<PathBuf> {
    let figure = queue_size_figure(config).context("building Figure 1")?;
    save(&figure, &config.fig_1_output, config.image_size)?;
    Ok(config.fig_1_output.clone())
}

/// Queue length CDF per protocol and flow count.
pub fn queue_cdf_figure(config: &PlotConfig) -> Result<Figure> {
    let mut figure = Figure::new();
    for (input, color) in config.fig_13_inputs.iter().zip(FIG_13_COLORS.iter().cycle()) {
        let table = load(&input.file)?;
        let color: Rgb = color.parse()?;
        figure = figure.plot(
            &table.column("queue_length")?,
            &table.column("cdf")?,
            SeriesOptions::default().color(color).label(input.label()),
        );
    }

    Ok(figure
        .x_label("Queue Length (packets)")
        .y_label("CDF")
        .title("Figure 13, DCTCP vs TCP cdf")
        .legend(LegendPosition::Best))
}

/// Render Figure 13 and return the written path.
pub fn plot_queue_cdf_fig_13(config: &PlotConfig) -> Result<PathBuf> {
    let figure = queue_cdf_figure(config).context("building Figure 13")?;
    save(&figure, &config.fig_13_output, config.image_size)?;
    Ok(config.fig_13_output.clone())
}

/// Scatter of `(x, y)` with marginal histograms, written to `path`.
pub fn plot_scatter_hist(x: &[f64], y: &[f64], path: &Path, size: (u32, u32)) -> Result<()> {
    let combo = ScatterHist::new(x, y);
    StaticChartRenderer::save_scatter_hist(&combo, path, size)?;
    Ok(())
}

fn save(figure: &Figure, path: &Path, size: (u32, u32)) -> Result<()> {
    StaticChartRenderer::save(figure, path, size)?;
    Ok(())
}

/// Render Figure 1 then Figure 13. The first failure aborts the run, so a
/// Figure 1 error leaves no output and a Figure 13 error keeps Figure 1.
pub fn run(config: &PlotConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(2);
    written.push(plot_queue_size_fig_1(config)?);
    written.push(plot_queue_cdf_fig_13(config)?);
    info!("Rendered {} figures", written.len());
    Ok(written)
}
