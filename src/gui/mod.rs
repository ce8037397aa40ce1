//! GUI module - interactive figure display

mod app;

pub use app::{show_figure, FigureApp};
