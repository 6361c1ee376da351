//! Runtime configuration for the server.
//!
//! The port comes from the `PORT` environment variable; everything else is
//! supplied on the command line and defaults to the historical behavior
//! (`julia` on `PATH`, no timeout).

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::consts::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SOLVER, PORT_ENV};

/// Everything the server needs to run.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Solver executable; receives the script path as its only argument.
    pub solver: String,
    /// Directory where per-request scratch scripts are created.
    pub scratch_dir: PathBuf,
    /// Upper bound on a single solve. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
            solver: DEFAULT_SOLVER.to_string(),
            scratch_dir: std::env::temp_dir(),
            timeout: None,
        }
    }
}

impl ServerConfig {
    /// Address to bind the listener to.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read the port from the process environment.
pub fn port_from_env() -> Result<u16> {
    parse_port(std::env::var(PORT_ENV).ok().as_deref())
}

/// Resolve a raw `PORT` value. Unset or empty falls back to 8080.
pub fn parse_port(raw: Option<&str>) -> Result<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid {PORT_ENV} value: {value:?}")),
    }
}
