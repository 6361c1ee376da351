use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use optserve::banner::print_banner;
use optserve::config::{ServerConfig, port_from_env};
use optserve::consts::{DEFAULT_HOST, DEFAULT_SOLVER};
use optserve::server::{AppState, serve};
use optserve::solver::process::ProcessSolver;

#[derive(Parser)]
#[command(
    name = "optserve",
    version,
    about = "Solve optimization problems posted as JSON with an external JuMP solver."
)]
struct Cli {
    /// Interface to listen on (the port comes from $PORT, default 8080)
    #[arg(long, default_value_t = DEFAULT_HOST)]
    host: IpAddr,

    /// Solver executable, invoked as `<solver> <script>`
    #[arg(short, long, default_value = DEFAULT_SOLVER)]
    solver: String,

    /// Directory for per-request scratch scripts (default: system temp dir)
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Abort a solve after this many seconds (default: wait forever)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = ServerConfig {
        host: cli.host,
        port: port_from_env()?,
        solver: cli.solver,
        scratch_dir: cli.scratch_dir.unwrap_or_else(std::env::temp_dir),
        timeout: cli.timeout.map(Duration::from_secs),
    };

    print_banner(&config);

    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;
    tracing::info!(addr = %config.addr(), "listening");

    let solver = Arc::new(ProcessSolver::new(config.solver.clone()));
    let state = AppState::new(solver, config.scratch_dir.clone(), config.timeout);

    serve(listener, state, async {
        let _ = tokio::signal::ctrl_c().await;
        tracing::info!("shutting down");
    })
    .await
}
