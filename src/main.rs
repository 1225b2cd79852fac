//! Print Advisor - print assessment analysis service

#![allow(missing_docs)]

use anyhow::Context;
use clap::Parser;
use print_advisor::config::Config;
use print_advisor::server;
use print_advisor::utils::logging::{bootstrap_subscriber, init_tracing};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(name = "print-advisor")]
#[command(version, about = "Print assessment analysis API server")]
struct Args {
    /// Configuration file (defaults to config/advisor.yaml when present)
    #[arg(short, long, env = "ADVISOR_CONFIG")]
    config: Option<PathBuf>,

    /// Server host, overrides configuration and environment
    #[arg(long)]
    host: Option<String>,

    /// Server port, overrides configuration and environment
    #[arg(short, long)]
    port: Option<u16>,
}

async fn run(args: Args) -> anyhow::Result<()> {
    let bootstrap = tracing::subscriber::set_default(bootstrap_subscriber());

    let mut config = Config::load(args.config.as_deref())
        .await
        .context("Failed to load configuration")?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    drop(bootstrap);
    init_tracing(&config.logging)?;
    info!(
        model = %config.analysis.model,
        address = %config.server.address(),
        "Configuration loaded"
    );

    server::run_server(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
