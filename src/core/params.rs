//! Owned run parameters shared by the CLI and the library API.
use serde::{Deserialize, Serialize};

use crate::types::Partition;

/// Everything the batch generator needs to render a job script, minus the
/// input file list (which is passed separately and consumed by the
/// generator).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunParams {
    /// Cores per job (`#SBATCH -n`).
    pub cores: u32,
    /// Nodes per job (`#SBATCH -N`); 0 lets Slurm decide and omits the line.
    pub nodes: u32,
    /// Partition (`#SBATCH -p`).
    pub partition: Partition,
    /// Account (`#SBATCH -A`).
    pub account: String,
    /// Max runtime per job, `HH:MM:SS` (`#SBATCH -t`).
    pub time_limit: String,
    /// Node feature constraint (`#SBATCH -C`), omitted when unset.
    pub constraint: Option<String>,
    /// Job name override (`#SBATCH -J`); default is the first file of each batch.
    pub job_name: Option<String>,
    /// Command template with `{query}` and optional `{cwd}` placeholders.
    pub call: String,
    /// Files stacked per job script. Must be at least 1.
    pub stack: usize,
    /// Stage each file into `$TMPDIR` (decompressing known formats) before
    /// the command runs on it.
    pub copy_decompress: bool,
    /// Print generated scripts instead of submitting them.
    pub dry_run: bool,
}

impl Default for RunParams {
    fn default() -> Self {
        RunParams {
            cores: 1,
            nodes: 0,
            partition: Partition::Core,
            account: "b2016371".to_string(),
            time_limit: "01:00:00".to_string(),
            constraint: None,
            job_name: None,
            call: String::new(),
            stack: 1,
            copy_decompress: false,
            dry_run: false,
        }
    }
}
