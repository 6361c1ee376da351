use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use super::{SolveOutput, Solver};

/// Invokes an external executable as `<program> <script>`.
pub struct ProcessSolver {
    program: String,
}

impl ProcessSolver {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl Solver for ProcessSolver {
    fn name(&self) -> &str {
        &self.program
    }

    async fn solve(&self, script: &Path) -> Result<SolveOutput> {
        // kill_on_drop: a timed-out request must not leave the solver running
        let output = Command::new(&self.program)
            .arg(script)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to run solver `{}`", self.program))?;

        Ok(SolveOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code(),
        })
    }
}
