//! snipbin server entry point.
//!
//! Loads configuration (env/TOML via figment, overridable by CLI flags),
//! opens the snippet database, and serves the HTML app until SIGINT or
//! SIGTERM.

use std::path::PathBuf;

use anyhow::Result;
use axum::http::Request;
use clap::Parser;
use snipbin_core::{AppConfig, SnippetDb};
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use snipbin_server::{AppState, router};

/// snipbin - short-lived text snippets over HTTP.
#[derive(Parser, Debug)]
#[command(name = "snipbin")]
#[command(about = "Pastebin-style server for short-lived text snippets", long_about = None)]
struct Args {
    /// HTTP network address, overrides SNIPBIN_BIND_ADDR.
    #[arg(long)]
    addr: Option<String>,

    /// Directory of static assets, overrides SNIPBIN_STATIC_DIR.
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// SQLite database path, overrides SNIPBIN_DB_PATH.
    #[arg(long)]
    db: Option<PathBuf>,
}

impl Args {
    /// Apply CLI overrides on top of the loaded config, then re-validate.
    fn apply(self, mut config: AppConfig) -> Result<AppConfig> {
        if let Some(addr) = self.addr {
            config.bind_addr = addr;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(db) = self.db {
            config.db_path = db;
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = args.apply(AppConfig::load()?)?;

    let db = SnippetDb::open_with_timezone(&config.db_path, config.display_timezone()).await?;
    tracing::info!(db_path = %config.db_path.display(), "snippet database opened");

    spawn_purge_task(&db, &config);

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(db, config);

    let app = router(state).layer(TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        tracing::span!(
            Level::INFO,
            "http_request",
            method = %request.method(),
            path = %request.uri().path(),
        )
    }));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting snipbin server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Periodically delete expired rows so the database doesn't grow forever.
/// Reads already filter on expiry, so a failed purge is only logged.
fn spawn_purge_task(db: &SnippetDb, config: &AppConfig) {
    if config.purge_interval_secs == 0 {
        return;
    }

    let db = db.clone();
    let period = config.purge_interval();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await; // consume the immediate first tick
        loop {
            ticker.tick().await;
            match db.purge_expired().await {
                Ok(0) => {}
                Ok(deleted) => tracing::info!(deleted, "purged expired snippets"),
                Err(err) => tracing::error!(error = %err, "snippet purge failed"),
            }
        }
    });
}

/// Resolves on SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
