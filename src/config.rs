//! Plot Configuration Module
//! Names every input file, its column layout, and every output image.

use itertools::Itertools;
use std::path::{Path, PathBuf};

use crate::data::{load, LoaderError, Table};

/// Savitzky-Golay window used for the throughput curves.
pub const THROUGHPUT_WINDOW: usize = 51;
/// Savitzky-Golay polynomial degree used for the throughput curves.
pub const THROUGHPUT_DEGREE: usize = 3;

/// Protocols compared in Figure 13, in drawing order.
pub const FIG_13_PROTOCOLS: [&str; 2] = ["dctcp", "tcp"];
/// Flow counts compared in Figure 13, in drawing order.
pub const FIG_13_FLOWS: [u32; 2] = [2, 20];
/// ColorBrewer diverging palette, one entry per Figure 13 curve.
pub const FIG_13_COLORS: [&str; 4] = ["#d7191c", "#fdae61", "#abdda4", "#2b83ba"];

const THROUGHPUT_COLUMNS: [&str; 2] = ["seconds", "throughput"];
const QUEUE_COLUMNS: [&str; 3] = ["seconds", "queue_length", "backlog"];
const CDF_COLUMNS: [&str; 2] = ["queue_length", "cdf"];

/// A delimited input file and the layout used to read it.
#[derive(Debug, Clone, PartialEq)]
pub struct InputFile {
    pub path: PathBuf,
    pub delimiter: u8,
    pub columns: Vec<String>,
    pub has_header: bool,
}

impl InputFile {
    pub fn new(path: impl Into<PathBuf>, delimiter: u8, columns: &[&str], has_header: bool) -> Self {
        Self {
            path: path.into(),
            delimiter,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            has_header,
        }
    }

    /// Read the file into a [`Table`].
    pub fn load(&self) -> Result<Table, LoaderError> {
        let columns: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        load(&self.path, self.delimiter, &columns, self.has_header)
    }

    fn rooted(mut self, dir: &Path) -> Self {
        self.path = dir.join(&self.path);
        self
    }
}

/// One Figure 13 curve: protocol, flow count and its data file.
#[derive(Debug, Clone, PartialEq)]
pub struct CdfInput {
    pub protocol: String,
    pub flows: u32,
    pub file: InputFile,
}

impl CdfInput {
    /// Legend label, e.g. `dctcp_flows_2`.
    pub fn label(&self) -> String {
        format!("{}_flows_{}", self.protocol, self.flows)
    }
}

/// File layout for every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub throughput_first: InputFile,
    pub throughput_second: InputFile,
    pub fig_1_tcp: InputFile,
    pub fig_1_dctcp: InputFile,
    pub fig_1_output: PathBuf,
    pub fig_13_inputs: Vec<CdfInput>,
    pub fig_13_output: PathBuf,
    /// Output image size in pixels.
    pub image_size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        let fig_13_inputs = FIG_13_PROTOCOLS
            .into_iter()
            .cartesian_product(FIG_13_FLOWS)
            .map(|(protocol, flows)| CdfInput {
                protocol: protocol.to_string(),
                flows,
                file: InputFile::new(
                    format!("figure_13_flows_{flows}_{protocol}.dat"),
                    b' ',
                    &CDF_COLUMNS,
                    true,
                ),
            })
            .collect();

        Self {
            throughput_first: InputFile::new(
                "tcp-validation-first-tcp-throughput.dat",
                b',',
                &THROUGHPUT_COLUMNS,
                false,
            ),
            throughput_second: InputFile::new(
                "tcp-validation-second-tcp-throughput.dat",
                b' ',
                &THROUGHPUT_COLUMNS,
                false,
            ),
            fig_1_tcp: InputFile::new("fig_1_tcp_result.dat", b' ', &QUEUE_COLUMNS, true),
            fig_1_dctcp: InputFile::new("fig_1_dctcp_result.dat", b' ', &QUEUE_COLUMNS, true),
            fig_1_output: PathBuf::from("figure_1_tcp_dctcp_queue_size.png"),
            fig_13_inputs,
            fig_13_output: PathBuf::from("figure_13_tcp_dctcp_cdf.png"),
            image_size: (1024, 768),
        }
    }
}

impl PlotConfig {
    /// Default layout with every input and output resolved against `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let default = Self::default();
        Self {
            throughput_first: default.throughput_first.rooted(dir),
            throughput_second: default.throughput_second.rooted(dir),
            fig_1_tcp: default.fig_1_tcp.rooted(dir),
            fig_1_dctcp: default.fig_1_dctcp.rooted(dir),
            fig_1_output: dir.join(default.fig_1_output),
            fig_13_inputs: default
                .fig_13_inputs
                .into_iter()
                .map(|input| CdfInput {
                    file: input.file.rooted(dir),
                    ..input
                })
                .collect(),
            fig_13_output: dir.join(default.fig_13_output),
            image_size: default.image_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fig_13_inputs_follow_product_order() {
        let config = PlotConfig::default();
        let names: Vec<String> = config
            .fig_13_inputs
            .iter()
            .map(|input| input.file.path.display().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "figure_13_flows_2_dctcp.dat",
                "figure_13_flows_20_dctcp.dat",
                "figure_13_flows_2_tcp.dat",
                "figure_13_flows_20_tcp.dat",
            ]
        );
        let labels: Vec<String> = config.fig_13_inputs.iter().map(CdfInput::label).collect();
        assert_eq!(
            labels,
            vec!["dctcp_flows_2", "dctcp_flows_20", "tcp_flows_2", "tcp_flows_20"]
        );
    }

    #[test]
    fn throughput_files_use_different_delimiters() {
        let config = PlotConfig::default();
        assert_eq!(config.throughput_first.delimiter, b',');
        assert_eq!(config.throughput_second.delimiter, b' ');
        assert!(!config.throughput_first.has_header);
        assert!(config.fig_1_tcp.has_header);
        assert_eq!(config.fig_1_tcp.columns, vec!["seconds", "queue_length", "backlog"]);
    }

    #[test]
    fn in_dir_reroots_inputs_and_outputs() {
        let config = PlotConfig::in_dir("/data/run");
        assert_eq!(
            config.fig_1_output,
            PathBuf::from("/data/run/figure_1_tcp_dctcp_queue_size.png")
        );
        assert_eq!(
            config.fig_13_inputs[3].file.path,
            PathBuf::from("/data/run/figure_13_flows_20_tcp.dat")
        );
        assert_eq!(config.fig_13_inputs[3].label(), "tcp_flows_20");
    }
}
