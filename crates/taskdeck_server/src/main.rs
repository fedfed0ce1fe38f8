//! TaskDeck server entry point.
//!
//! # Responsibility
//! - Parse process configuration from flags and environment.
//! - Bootstrap logging and the durable store, then serve HTTP.
//!
//! # Invariants
//! - The store handle is created once here and shared for the process
//!   lifetime; shutdown drops it with the context.

use anyhow::Context;
use clap::Parser;
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use taskdeck_core::db::open_db;
use taskdeck_core::{default_log_level, init_logging};
use taskdeck_server::{build_router, AppContext};

/// Durable task record service over HTTP.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version)]
struct Cli {
    /// SQLite database file backing the task store.
    #[arg(long, env = "TASKDECK_DB", default_value = "tasks.db")]
    db_path: PathBuf,

    /// Address the HTTP server binds to.
    #[arg(long, env = "TASKDECK_BIND", default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Log level (trace|debug|info|warn|error). Defaults per build mode.
    #[arg(long, env = "TASKDECK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Directory for rolling log files; logs to stderr when unset.
    #[arg(long, env = "TASKDECK_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.as_deref() {
        Some(level) => level,
        None => default_log_level(),
    };
    init_logging(level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let conn = open_db(&cli.db_path).with_context(|| {
        format!(
            "failed to open task database at `{}`",
            cli.db_path.display()
        )
    })?;
    let ctx = Arc::new(AppContext::new(conn));

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    info!("event=http_listen module=server status=ok addr={}", cli.bind);

    axum::serve(listener, build_router(ctx)).await?;
    Ok(())
}
