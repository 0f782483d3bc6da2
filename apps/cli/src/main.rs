use anyhow::Context;
use clap::Parser;
use plzmap::kernel::config::load_map_config;
use plzmap_cli::{Cli, run};
use plzmap_logger::Logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_map_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    let _log = Logger::from_config(env!("CARGO_PKG_NAME"), &config.logging)?;

    run(&cli, config, &mut std::io::stdout().lock()).await
}
