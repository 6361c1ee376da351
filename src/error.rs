use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::consts::EXIT_CODE_HEADER;

/// Everything that can go wrong while serving one request. Each variant
/// becomes an HTTP error response; none of them stop the server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not valid JSON or lacked a required field.
    #[error("invalid problem: {0}")]
    InvalidProblem(#[from] serde_json::Error),

    /// The scratch script could not be created or written.
    #[error("{0:#}")]
    Scratch(anyhow::Error),

    /// The solver executable could not be started.
    #[error("{0:#}")]
    SolverUnavailable(anyhow::Error),

    /// The solver ran and exited unsuccessfully.
    #[error("solver exited with {}", exit_label(.exit_code))]
    SolverFailed {
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("solver did not finish within {0:?}")]
    TimedOut(Duration),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidProblem(_) => StatusCode::BAD_REQUEST,
            Self::Scratch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SolverUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::SolverFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

/// Header value for an exit status: the code, or `signal` if there was none.
pub fn exit_label(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => code.to_string(),
        None => "signal".to_string(),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // body is the solver's stderr
            Self::SolverFailed { exit_code, stderr } => (
                status,
                [(EXIT_CODE_HEADER, exit_label(&exit_code))],
                stderr,
            )
                .into_response(),
            other => (status, format!("{}\n", other)).into_response(),
        }
    }
}
