//! High-level library API.
//!
//! The CLI is a thin consumer of these entry points; embedding applications
//! can drive the same machinery directly.
//!
//! ```no_run
//! use parbatch::{RunParams, api};
//! use parbatch::io::Sbatch;
//!
//! fn main() -> parbatch::Result<()> {
//!     let params = RunParams {
//!         call: "blat db.fasta {query} {query}.blast8".to_string(),
//!         stack: 4,
//!         ..RunParams::default()
//!     };
//!     let files = vec!["q1.fasta".to_string(), "q2.fasta".to_string()];
//!
//!     let submitted = api::submit_batches(params, files, &mut Sbatch)?;
//!     println!("submitted {submitted} jobs");
//!     Ok(())
//! }
//! ```

use tracing::info;

use crate::core::batch::ScriptBatches;
use crate::core::params::RunParams;
use crate::error::Result;
use crate::io::submit::Submit;

/// Build the script iterator for the given parameters and input files.
///
/// Takes ownership of the file list; the iterator consumes it front to back.
pub fn generate_scripts(params: RunParams, files: Vec<String>) -> Result<ScriptBatches> {
    ScriptBatches::new(params, files)
}

/// Generate and submit every batch, strictly in order, stopping at the
/// first error. Returns the number of submitted batches; batches submitted
/// before a failure stay submitted.
///
/// Dry-run is the caller's concern: iterate [`generate_scripts`] and print
/// each [`crate::JobScript`]'s text instead of calling this.
pub fn submit_batches(
    params: RunParams,
    files: Vec<String>,
    submitter: &mut dyn Submit,
) -> Result<usize> {
    let mut submitted = 0;
    for script in generate_scripts(params, files)? {
        let script = script?;
        submitter.submit(&script.text)?;
        info!(files = script.files.len(), "submitted batch");
        submitted += 1;
    }
    Ok(submitted)
}
