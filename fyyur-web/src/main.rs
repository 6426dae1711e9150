//! Fyyur - venue and artist booking directory
//!
//! Serves the HTML pages and JSON API over one SQLite catalog. Settings
//! come from the command line, environment, `config.toml` and compiled
//! defaults, in that order.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use fyyur_common::config::{load_settings, CliOverrides, Settings};
use fyyur_common::db::init_database;
use fyyur_common::CatalogRepository;
use fyyur_web::seed::seed_demo_data;
use fyyur_web::{build_router, AppState};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for fyyur
#[derive(Parser, Debug)]
#[command(name = "fyyur")]
#[command(about = "Venue and artist booking directory")]
#[command(version)]
struct Args {
    /// SQLite database file
    #[arg(short, long, env = "FYYUR_DATABASE")]
    database: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5000
    #[arg(short, long, env = "FYYUR_BIND")]
    bind: Option<String>,

    /// Explicit config file (default: <config dir>/fyyur/config.toml)
    #[arg(short, long, env = "FYYUR_CONFIG")]
    config: Option<PathBuf>,

    /// Also write plain-text logs to this file
    #[arg(long, env = "FYYUR_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Insert demo venues, artists and shows when the catalog is empty
    #[arg(long)]
    seed: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            database_path: self.database.clone(),
            bind_addr: self.bind.clone(),
            log_file: self.log_file.clone(),
            config_file: self.config.clone(),
        }
    }
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

fn init_tracing(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.log_level;
        format!("fyyur={},tower_http={}", level, level).into()
    });

    let file_layer = match &settings.log_file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(open_log_file(path)?)),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings(&args.overrides());

    init_tracing(&settings)?;

    // Build identification first, before any database delay
    info!(
        "Starting Fyyur v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    info!("Database path: {}", settings.database_path.display());
    if let Some(log_file) = &settings.log_file {
        info!("Log file: {}", log_file.display());
    }

    let pool = match init_database(&settings.database_path).await {
        Ok(pool) => {
            info!("✓ Database ready");
            pool
        }
        Err(e) => {
            error!("Failed to open database: {}", e);
            return Err(e).context("Failed to initialize database");
        }
    };
    let catalog = CatalogRepository::new(pool);

    if args.seed {
        seed_demo_data(&catalog)
            .await
            .context("Failed to seed demo data")?;
    }

    let app = build_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", settings.bind_addr))?;
    info!("Fyyur listening on http://{}", settings.bind_addr);
    info!("Health check: http://{}/health", settings.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
