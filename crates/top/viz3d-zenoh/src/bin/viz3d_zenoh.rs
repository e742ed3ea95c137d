//! Entry point for the viz3d-zenoh binary.

use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use viz3d_zenoh::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    viz3d_zenoh::app::run(cli).await
}
