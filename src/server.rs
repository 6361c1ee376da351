//! The HTTP surface: one handler that turns a posted problem into solver output.
//!
//! Every method and path reaches [`solve`]. A request is decoded, rendered to
//! a private scratch script, handed to the [`Solver`], and answered with the
//! solver's stdout. Failures are scoped to the request that caused them.

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::consts::EXIT_CODE_HEADER;
use crate::error::{ApiError, exit_label};
use crate::problem::OptimizationSpec;
use crate::scratch::ScratchFile;
use crate::solver::Solver;
use crate::template::render_script;

/// Shared, read-only state handed to every request.
pub struct AppState {
    solver: Arc<dyn Solver>,
    scratch_dir: PathBuf,
    timeout: Option<Duration>,
    requests: AtomicU64,
}

impl AppState {
    pub fn new(solver: Arc<dyn Solver>, scratch_dir: PathBuf, timeout: Option<Duration>) -> Self {
        Self {
            solver,
            scratch_dir,
            timeout,
            requests: AtomicU64::new(0),
        }
    }
}

/// Build the router. Every route falls through to [`solve`]; bodies are
/// not size-limited.
pub fn router(state: AppState) -> Router {
    Router::new()
        .fallback(solve)
        .layer(DefaultBodyLimit::disable())
        .with_state(Arc::new(state))
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server terminated unexpectedly")
}

async fn solve(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    let id = state.requests.fetch_add(1, Ordering::Relaxed) + 1;
    let span = info_span!("request", id, %method, path = %uri.path());

    async move {
        info!(bytes = body.len(), "received problem");
        match run(&state, &body).await {
            Ok(stdout) => {
                info!(bytes = stdout.len(), "solved");
                (
                    [
                        ("content-type", "text/plain"),
                        (EXIT_CODE_HEADER, "0"),
                    ],
                    stdout,
                )
                    .into_response()
            }
            Err(err) => {
                match &err {
                    ApiError::InvalidProblem(_) => warn!(error = %err, "rejected problem"),
                    ApiError::SolverFailed { exit_code, .. } => {
                        warn!(exit = %exit_label(exit_code), "solver failed")
                    }
                    ApiError::TimedOut(_) => warn!(error = %err, "solver timed out"),
                    ApiError::Scratch(_) | ApiError::SolverUnavailable(_) => {
                        error!(error = %err, "request failed")
                    }
                }
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// Decode, render, write, solve. Returns the solver's stdout on success.
async fn run(state: &AppState, body: &[u8]) -> Result<Vec<u8>, ApiError> {
    let spec = OptimizationSpec::from_json(body)?;
    let script = render_script(&spec);

    let dir = state.scratch_dir.clone();
    let scratch = tokio::task::spawn_blocking(move || ScratchFile::create(&dir, &script))
        .await
        .map_err(|e| ApiError::Scratch(e.into()))?
        .map_err(ApiError::Scratch)?;
    debug!(path = %scratch.path().display(), solver = state.solver.name(), "running solver");

    let solving = state.solver.solve(scratch.path());
    let outcome = match state.timeout {
        Some(limit) => tokio::time::timeout(limit, solving)
            .await
            .map_err(|_| ApiError::TimedOut(limit))?,
        None => solving.await,
    };
    let output = outcome.map_err(ApiError::SolverUnavailable)?;

    if !output.stderr.is_empty() {
        debug!(stderr = %String::from_utf8_lossy(&output.stderr), "solver stderr");
    }

    if output.success() {
        Ok(output.stdout)
    } else {
        Err(ApiError::SolverFailed {
            exit_code: output.exit_code,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
