//! Data module - delimited file loading and smoothing

mod loader;
mod processor;

pub use loader::{load, LoaderError, Table};
pub use processor::{DataProcessor, SmoothError};

#[cfg(test)]
pub(crate) use loader::tests::fixture_dir;
