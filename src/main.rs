use anyhow::Context;
use clap::Parser;
use portal_forms::cli::Cli;
use portal_forms::logging::init_tracing;
use tokio::runtime::Builder;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let log_path = init_tracing();

    let config = cli.load_config().context("Failed to load configuration")?;
    info!(?log_path, ?config, "Starting portal-forms");

    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    portal_forms::ui::run(&config, runtime.handle().clone()).context("Terminal UI failed")?;

    runtime.shutdown_background();
    Ok(())
}
