pub mod mock;
pub mod process;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// What a solver run left behind.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolveOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// Exit code, or `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
}

impl SolveOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a rendered script. An `Err` means the solver could not be run at
/// all; a solver that ran and failed is reported through [`SolveOutput`].
#[async_trait]
pub trait Solver: Send + Sync {
    fn name(&self) -> &str;
    async fn solve(&self, script: &Path) -> Result<SolveOutput>;
}
