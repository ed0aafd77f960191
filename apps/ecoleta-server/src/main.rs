mod config;
mod logging;

use std::path::{Path, PathBuf};

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use config::AppConfig;
use ecoleta_points::infra::storage::migrations::Migrator;

/// Ecoleta Server - waste collection point registry
#[derive(Parser)]
#[command(name = "ecoleta-server")]
#[command(about = "Ecoleta Server - waste collection point registry")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.config {
        if !Path::new(path).is_file() {
            anyhow::bail!("config file does not exist: {}", path.display());
        }
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (ECOLETA__*) -> 4) CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);

    logging::init(&config.logging, cli.verbose);

    tracing::info!("Ecoleta Server starting");

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_pretty_json()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    // Load already validated shape and values; report and exit.
    tracing::info!(
        bind_addr = %config.server.bind_addr,
        database = %config.database.url,
        "Configuration is valid"
    );
    Ok(())
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db = connect_database(&config).await?;

    tracing::info!("Running database migrations");
    Migrator::up(&db, None).await?;

    let (service, store) = ecoleta_points::build(db, &config.points);

    let app = ecoleta_points::api::rest::routes::router(service, store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(config.points.max_upload_bytes));

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr).await?;
    tracing::info!(addr = %config.server.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn connect_database(config: &AppConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.database.url.clone());
    opts.max_connections(config.database.max_connections);

    let db = Database::connect(opts).await?;
    tracing::info!(url = %config.database.url, "Connected to database");
    Ok(db)
}

async fn shutdown_signal() {
    // If the handler cannot be installed we simply never shut down gracefully.
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
