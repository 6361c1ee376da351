//! Startup banner.

use crate::config::ServerConfig;
use crate::consts::{NAME, VERSION};

/// Render the banner describing the effective configuration.
pub fn build_banner(config: &ServerConfig) -> String {
    let timeout = match config.timeout {
        Some(limit) => format!("{}s", limit.as_secs()),
        None => "none".to_string(),
    };

    format!(
        r#"
   {name} {version}

   listen    http://{addr}
   solver    {solver} <script>
   scratch   {scratch}
   timeout   {timeout}
"#,
        name = NAME,
        version = VERSION,
        addr = config.addr(),
        solver = config.solver,
        scratch = config.scratch_dir.display(),
        timeout = timeout,
    )
}

pub fn print_banner(config: &ServerConfig) {
    println!("{}", build_banner(config));
}
