//! Per-request scratch scripts.
//!
//! Each request gets its own uniquely named file, so concurrent requests can
//! never solve each other's problems. The file is removed when the
//! [`ScratchFile`] is dropped, whether or not the solve succeeded.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::consts::{SCRATCH_PREFIX, SCRATCH_SUFFIX};

/// A script on disk, deleted on drop.
#[derive(Debug)]
pub struct ScratchFile {
    file: NamedTempFile,
}

impl ScratchFile {
    /// Create a fresh file in `dir` holding `script`.
    pub fn create(dir: &Path, script: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(SCRATCH_PREFIX)
            .suffix(SCRATCH_SUFFIX)
            .tempfile_in(dir)
            .with_context(|| format!("failed to create scratch file in {}", dir.display()))?;

        file.write_all(script.as_bytes())
            .and_then(|_| file.flush())
            .context("failed to write scratch file")?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
