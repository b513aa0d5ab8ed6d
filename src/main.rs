//! Worlds backend server — CLI entry point.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use worlds_core::config::AppConfig;
use worlds_core::error::AppError;

#[derive(Debug, Parser)]
#[command(name = "worlds-server", about = "Worlds backend server", version)]
struct Cli {
    /// Configuration environment overlay (config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    env: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server
    Serve {
        /// Override the server port
        #[arg(short, long)]
        port: Option<u16>,

        /// Override the server host
        #[arg(long)]
        host: Option<String>,

        /// Run database migrations on startup
        #[arg(long, default_value = "true")]
        auto_migrate: bool,
    },
    /// Run database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(cli, config).await {
        tracing::error!("Fatal: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

async fn run(cli: Cli, mut config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting worlds backend v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::Serve {
            port,
            host,
            auto_migrate,
        } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }

            let pool = worlds_database::create_pool(&config.database).await?;

            if auto_migrate {
                worlds_database::migration::run_migrations(&pool).await?;
            }

            worlds_api::app::run_server(config, pool).await
        }
        Command::Migrate => {
            let pool = worlds_database::create_pool(&config.database).await?;
            worlds_database::migration::run_migrations(&pool).await?;
            tracing::info!("Migrations applied");
            Ok(())
        }
    }
}
