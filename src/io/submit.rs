//! Script submission.
//!
//! `Submit` is the seam between script generation and the scheduler, so the
//! generation loop can be exercised against a fake in tests. The production
//! implementation pipes the script text to `sbatch` on stdin and treats any
//! bytes on its stderr as fatal.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};

/// Accepts one complete job script per call.
pub trait Submit {
    fn submit(&mut self, script: &str) -> Result<()>;
}

/// Submits via the `sbatch` executable found on `PATH`.
#[derive(Debug, Default)]
pub struct Sbatch;

impl Submit for Sbatch {
    fn submit(&mut self, script: &str) -> Result<()> {
        debug!(bytes = script.len(), "piping job script to sbatch");

        let mut child = Command::new("sbatch")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // stdin is piped above, so take() cannot fail.
        child
            .stdin
            .take()
            .ok_or_else(|| Error::external("sbatch stdin unavailable"))?
            .write_all(script.as_bytes())?;

        let output = child.wait_with_output()?;
        if !output.stderr.is_empty() {
            return Err(Error::Sbatch {
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}
