//! Blueprint Server - project-planning generation over HTTP.

use blueprint_core::init_tracing;
use blueprint_models::OpenAICompatibleClient;
use blueprint_planning::ProjectPlanner;
use blueprint_server::{ServerConfig, create_router, serve_until, shutdown_signal};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Command-line arguments for the server.
#[derive(Parser, Debug)]
#[command(name = "blueprint-server")]
#[command(about = "Blueprint Server - structured project-planning generation")]
#[command(version)]
struct Args {
    /// Path to server configuration file
    #[arg(short, long, default_value = "blueprint.toml")]
    config: PathBuf,

    /// Override the listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// Validate configuration and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = ServerConfig::load(Some(&args.config))?;
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    init_tracing(config.log().filter(), config.log().log_format())?;
    if let Err(e) = dotenv {
        info!(reason = %e, "No .env file loaded");
    }

    info!("Starting Blueprint Server");
    info!(
        config_file = ?args.config,
        backend = %config.backend().base_url(),
        model = %config.backend().model(),
        "Configuration loaded"
    );

    if let Err(e) = config.backend().validate() {
        warn!(error = %e, "Backend is not usable; generation endpoints will return errors");
    }

    let addr = config.socket_addr()?;
    if args.check {
        info!(addr = %addr, "Configuration validation complete");
        return Ok(());
    }

    let client = OpenAICompatibleClient::new(config.backend().clone(), "openai_compatible");
    let planner = ProjectPlanner::with_settings(client, config.planner_settings());

    serve_until(addr, create_router(planner), shutdown_signal()).await?;
    info!("Blueprint Server stopped");
    Ok(())
}
