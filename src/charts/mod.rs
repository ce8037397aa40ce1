//! Charts module - figure model, static and interactive rendering

mod figure;
pub mod figures;
mod histogram;
mod plotter;
mod renderer;

pub use figure::{Figure, LegendPosition, ParseColorError, Rgb, Series, SeriesOptions};
pub use histogram::{histogram_counts, histogram_edges, ScatterHist, BIN_WIDTH};
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
