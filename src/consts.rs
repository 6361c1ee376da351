//! Project-wide constants.

use std::net::{IpAddr, Ipv4Addr};

pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the listening port.
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is unset or empty.
pub const DEFAULT_PORT: u16 = 8080;

/// Interface the server binds to by default.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Solver executable, resolved through `PATH`.
pub const DEFAULT_SOLVER: &str = "julia";

/// Scratch script files are named `problem-<random>.jl`.
pub const SCRATCH_PREFIX: &str = "problem-";
pub const SCRATCH_SUFFIX: &str = ".jl";

/// Response header carrying the solver's exit status.
pub const EXIT_CODE_HEADER: &str = "x-solver-exit-code";
