use std::io;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gif_search::{app, cli::Args, EnvSource};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load before tracing so RUST_LOG from .env applies.
    let env_file = dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .context("Failed to initialize logging")?;

    info!("Starting GIPHY search");

    if let Err(err) = env_file {
        warn!("Could not load .env file ({}), using system environment variables", err);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    if let Err(err) = app::run(&args, &EnvSource, &mut input, &mut output).await {
        error!("Failed to get GIFs: {}", err);
        app::report_failure(&mut io::stderr(), &err);
        std::process::exit(1);
    }

    Ok(())
}
