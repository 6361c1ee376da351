use anyhow::{Result, bail};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use super::{SolveOutput, Solver};

/// A canned solver for tests. Returns the same output for every script and
/// remembers what it was asked to run.
pub struct MockSolver {
    output: Option<SolveOutput>,
    delay: Duration,
    seen: Mutex<Vec<String>>,
}

impl MockSolver {
    /// Exit 0 with the given stdout.
    pub fn stdout(text: &str) -> Self {
        Self::with_output(SolveOutput {
            stdout: text.as_bytes().to_vec(),
            stderr: Vec::new(),
            exit_code: Some(0),
        })
    }

    pub fn with_output(output: SolveOutput) -> Self {
        Self {
            output: Some(output),
            delay: Duration::ZERO,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like a solver that is not installed.
    pub fn missing() -> Self {
        Self {
            output: None,
            delay: Duration::ZERO,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Sleep before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Contents of every script passed to `solve`, in call order.
    pub fn scripts(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Solver for MockSolver {
    fn name(&self) -> &str {
        "mock"
    }

    async fn solve(&self, script: &Path) -> Result<SolveOutput> {
        let contents = tokio::fs::read_to_string(script).await?;
        self.seen.lock().unwrap().push(contents);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.output {
            Some(output) => Ok(output.clone()),
            None => bail!("MockSolver: no solver installed (asked to run {})", script.display()),
        }
    }
}
