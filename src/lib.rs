#![doc = r#"
parbatch — batch a command over many input files as stacked Slurm jobs.

This crate partitions an ordered list of input files into fixed-size stacks,
renders the user's command template once per file, assembles one `sbatch` job
script per stack, and pipes each script to the scheduler's submission command
(or prints it in dry-run mode). It powers the parbatch CLI and can be embedded
in your own Rust applications.

The command template supports two placeholders: `{query}` (the current input
file) and `{cwd}` (the working directory at submission time). Any other
placeholder is rejected before anything is submitted.

Quick start: generate and submit
--------------------------------
```rust,no_run
use parbatch::{RunParams, api, io::Sbatch};

fn main() -> parbatch::Result<()> {
    let params = RunParams {
        call: "blat dbfile.fasta {query} {query}.blast8".to_string(),
        stack: 4,
        time_limit: "04:00:00".to_string(),
        ..RunParams::default()
    };
    let files = vec!["q1.fasta".to_string(), "q2.fasta".to_string()];

    let submitted = api::submit_batches(params, files, &mut Sbatch)?;
    println!("submitted {submitted} jobs");
    Ok(())
}
```

Inspect scripts without submitting
----------------------------------
```rust
use parbatch::{RunParams, api};

fn main() -> parbatch::Result<()> {
    let params = RunParams {
        call: "echo {query}".to_string(),
        stack: 2,
        ..RunParams::default()
    };
    let files = vec!["a.txt".to_string(), "b.txt".to_string()];

    for script in api::generate_scripts(params, files)? {
        let script = script?;
        print!("{}", script.text);
    }
    Ok(())
}
```

Custom submitters
-----------------
The `io::Submit` trait is the seam between generation and the scheduler;
implement it to capture scripts, route them somewhere other than `sbatch`,
or fake submission in tests.

Semantics
---------
- Stacks are consumed from the front of the input list, in order, exactly
  once; an input of L files with stack size N yields ceil(L/N) scripts.
- The job name directive defaults to the first (pre-staging) file of each
  stack unless an explicit name is given.
- With copy-decompress staging, `.gz`/`.bz2`/`.dsrc` files are decompressed
  into `$TMPDIR` and the template sees the suffix-stripped name.
- Submission is fire-and-forget: any bytes on sbatch's stderr abort the run;
  already-submitted stacks stay submitted.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::batch::{JobScript, ScriptBatches};
pub use crate::core::params::RunParams;
pub use error::{Error, Result};
pub use types::{Compression, Partition};
