//! DCTCP Plots - queue length, CDF and throughput charts for TCP vs DCTCP
//! simulation output.
//!
//! Each chart reads its delimited input files, optionally smooths a series,
//! builds a [`charts::Figure`] and either saves it as a PNG or shows it in a
//! window.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;

pub use config::PlotConfig;
