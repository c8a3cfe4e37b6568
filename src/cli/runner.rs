use tracing::{debug, info};

use parbatch::api;
use parbatch::core::params::RunParams;
use parbatch::io::input;
use parbatch::io::submit::{Sbatch, Submit};

use super::args::CliArgs;
use super::errors::AppError;

fn params_from_args(args: &CliArgs) -> RunParams {
    RunParams {
        cores: args.cores,
        nodes: args.nodes,
        partition: args.partition,
        account: args.account.clone(),
        time_limit: args.time.clone(),
        constraint: args.constraint.clone(),
        job_name: args.jobname.clone(),
        call: args.call.clone(),
        stack: args.stack,
        copy_decompress: args.copy_decompress,
        dry_run: args.dryrun,
    }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let files = match &args.file {
        Some(path) => {
            input::read_list_file(path).map_err(|source| AppError::ListFile {
                path: path.clone(),
                source,
            })?
        }
        None => args.query.clone(),
    };

    let params = params_from_args(&args);
    let dry_run = params.dry_run;

    let batches = api::generate_scripts(params, files).map_err(AppError::Run)?;
    info!(
        "Generating {} job script(s), {} file(s) per script",
        batches.script_count(),
        args.stack
    );

    if dry_run {
        for script in batches {
            let script = script.map_err(AppError::Run)?;
            print!("{}", script.text);
        }
        return Ok(());
    }

    let mut submitter = Sbatch;
    for script in batches {
        let script = script.map_err(AppError::Run)?;
        debug!(script = %script.text, "generated job script");

        submitter.submit(&script.text).map_err(AppError::Run)?;

        if script.files.len() > 1 {
            println!(
                "Submitted stacked Slurm job for {} files: '{}'",
                script.files.len(),
                script.files.join("', '")
            );
        } else {
            println!("Submitted Slurm job for: '{}'", script.files[0]);
        }
    }

    Ok(())
}
