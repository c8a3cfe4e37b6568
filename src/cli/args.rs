use clap::Parser;
use std::path::PathBuf;

use parbatch::types::Partition;

#[derive(Parser)]
#[command(
    name = "parbatch",
    version,
    about = "Run a program over many input files as stacked Slurm sbatch jobs"
)]
pub struct CliArgs {
    /// Number of cores per job
    #[arg(short = 'n', default_value_t = 1)]
    pub cores: u32,

    /// Number of nodes per job; 0 lets Slurm decide.
    /// Setting N>0 will require 'n mod 16 = 0' (advisory, enforced by Slurm)
    #[arg(short = 'N', default_value_t = 0)]
    pub nodes: u32,

    /// Slurm partition
    #[arg(short = 'p', value_enum, default_value_t = Partition::Core)]
    pub partition: Partition,

    /// Slurm account
    #[arg(short = 'A', default_value = "b2016371")]
    pub account: String,

    /// Max runtime per job (HH:MM:SS)
    #[arg(short = 't', default_value = "01:00:00")]
    pub time: String,

    /// Node feature constraint, e.g. mem64GB, mem128GB, mem256GB,
    /// mem512GB, usage_mail. Combine options with '&': 'mem128GB&usage_mail'
    #[arg(short = 'C')]
    pub constraint: Option<String>,

    /// Slurm job name [default: first query file in each job script]
    #[arg(short = 'J')]
    pub jobname: Option<String>,

    /// Program and arguments in a single-quoted string,
    /// e.g. 'blat dbfile.fasta {query} -t=dnax q=prot {query}.blast8'.
    /// {query} is replaced by each input file, {cwd} by the submission
    /// working directory
    #[arg(long, required = true)]
    pub call: String,

    /// Stack N calls in each job script. Remember to end your command with
    /// '&' so stacked calls run simultaneously
    #[arg(long, default_value_t = 1, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub stack: usize,

    /// Copy each input file to node-local $TMPDIR before running the
    /// command, decompressing .gz, .bz2 and .dsrc on the way
    #[arg(long)]
    pub copy_decompress: bool,

    /// Print generated job scripts instead of submitting them
    #[arg(long)]
    pub dryrun: bool,

    /// Query file(s)
    #[arg(value_name = "FILE")]
    pub query: Vec<String>,

    /// Read the input file list from a file, one path per line
    /// (overrides FILE arguments)
    #[arg(short = 'f', long = "file")]
    pub file: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
