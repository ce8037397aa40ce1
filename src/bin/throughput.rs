//! Shows the smoothed throughput traces of the two TCP validation runs.
//! Not part of the default run.

use dctcp_plots::{charts::figures, PlotConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    figures::plot_throughput(&PlotConfig::default())
}
