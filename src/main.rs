//! Renders Figure 1 (queue length) and Figure 13 (queue length CDF) from the
//! simulation output in the working directory.

use dctcp_plots::{charts::figures, PlotConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    figures::run(&PlotConfig::default())?;
    Ok(())
}
