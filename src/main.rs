use anyhow::Context;
use clap::Parser;

use kpi_carousel::args::Args;
use kpi_carousel::{logging, ui};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_tracing();

    let config = args
        .resolve_config()
        .context("Failed to load configuration")?;
    tracing::info!(
        base_url = %config.endpoint.base_url,
        assets_dir = %config.ui.assets_dir.display(),
        "Starting kpi-carousel"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = ui::run(&config, runtime.handle().clone());
    runtime.shutdown_background();
    result
}
