//! Batch generation: partition the input file list into stacks and render
//! one sbatch job script per stack.
//!
//! `ScriptBatches` owns the file list and walks it with an explicit cursor,
//! front to back, never reordering and never revisiting a file. It yields
//! `ceil(files / stack)` scripts and is exhausted afterwards.

use crate::core::params::RunParams;
use crate::core::staging;
use crate::core::template::{self, TemplateContext};
use crate::error::{Error, Result};

/// One generated job script together with the original (pre-staging) names
/// of the files it covers.
#[derive(Debug, Clone)]
pub struct JobScript {
    pub text: String,
    pub files: Vec<String>,
}

/// Iterator over generated job scripts.
pub struct ScriptBatches {
    params: RunParams,
    files: Vec<String>,
    cursor: usize,
}

impl ScriptBatches {
    /// Take ownership of the input list. Fails if the stack size is zero.
    pub fn new(params: RunParams, files: Vec<String>) -> Result<Self> {
        if params.stack == 0 {
            return Err(Error::ZeroStack { stack: params.stack });
        }
        Ok(ScriptBatches {
            params,
            files,
            cursor: 0,
        })
    }

    /// Number of scripts this iterator will yield in total.
    pub fn script_count(&self) -> usize {
        self.files.len().div_ceil(self.params.stack)
    }

    fn render_batch(&self, batch: &[String]) -> Result<JobScript> {
        // Captured before staging rewrites any path.
        let cwd = std::env::current_dir()?.display().to_string();

        let mut lines = vec![
            "#!/usr/bin/env bash".to_string(),
            "# Job script automatically generated by parbatch".to_string(),
            format!("#SBATCH -n {}", self.params.cores),
            format!("#SBATCH -p {}", self.params.partition),
            format!("#SBATCH -A {}", self.params.account),
            format!("#SBATCH -t {}", self.params.time_limit),
        ];
        if self.params.nodes > 0 {
            lines.push(format!("#SBATCH -N {}", self.params.nodes));
        }
        if let Some(constraint) = self.params.constraint.as_deref()
            && !constraint.is_empty()
        {
            lines.push(format!("#SBATCH -C {constraint}"));
        }
        // Default job name is the first query file in the script.
        let job_name = self
            .params
            .job_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&batch[0]);
        lines.push(format!("#SBATCH -J {job_name}"));

        for file in batch {
            let call = if self.params.copy_decompress {
                let staged = staging::stage(file);
                let query = staged.staged_name.clone();
                lines.extend(staged.fragment);
                template::render(&self.params.call, &TemplateContext {
                    query: &query,
                    cwd: &cwd,
                })?
            } else {
                template::render(&self.params.call, &TemplateContext {
                    query: file,
                    cwd: &cwd,
                })?
            };
            lines.push(call);
        }

        let mut text = lines.join("\n");
        text.push('\n');

        Ok(JobScript {
            text,
            files: batch.to_vec(),
        })
    }
}

impl Iterator for ScriptBatches {
    type Item = Result<JobScript>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.files.len() {
            return None;
        }
        let end = usize::min(self.cursor + self.params.stack, self.files.len());
        let batch = self.files[self.cursor..end].to_vec();
        self.cursor = end;
        Some(self.render_batch(&batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(call: &str, stack: usize) -> RunParams {
        RunParams {
            call: call.to_string(),
            stack,
            ..RunParams::default()
        }
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn collect(batches: ScriptBatches) -> Vec<JobScript> {
        batches.map(|script| script.unwrap()).collect()
    }

    #[test]
    fn batches_partition_input_in_order() {
        let batches =
            ScriptBatches::new(params("echo {query}", 3), files(&["a", "b", "c", "d", "e", "f", "g"]))
                .unwrap();
        assert_eq!(batches.script_count(), 3);
        let scripts = collect(batches);
        assert_eq!(scripts.len(), 3);
        assert_eq!(scripts[0].files, files(&["a", "b", "c"]));
        assert_eq!(scripts[1].files, files(&["d", "e", "f"]));
        assert_eq!(scripts[2].files, files(&["g"]));
    }

    #[test]
    fn exact_multiple_has_full_last_batch() {
        let batches =
            ScriptBatches::new(params("echo {query}", 2), files(&["a", "b", "c", "d"])).unwrap();
        let scripts = collect(batches);
        assert_eq!(scripts.len(), 2);
        assert_eq!(scripts[1].files, files(&["c", "d"]));
    }

    #[test]
    fn stack_one_yields_one_file_per_script() {
        let batches = ScriptBatches::new(params("echo {query}", 1), files(&["a", "b", "c"])).unwrap();
        let scripts = collect(batches);
        assert_eq!(scripts.len(), 3);
        for script in &scripts {
            assert_eq!(script.files.len(), 1);
        }
    }

    #[test]
    fn empty_input_yields_no_scripts() {
        let batches = ScriptBatches::new(params("echo {query}", 4), vec![]).unwrap();
        assert_eq!(batches.script_count(), 0);
        assert_eq!(collect(batches).len(), 0);
    }

    #[test]
    fn zero_stack_is_rejected() {
        assert!(matches!(
            ScriptBatches::new(params("echo {query}", 0), files(&["a"])),
            Err(Error::ZeroStack { stack: 0 })
        ));
    }

    #[test]
    fn rendered_calls_appear_in_file_order() {
        let batches =
            ScriptBatches::new(params("echo {query}", 2), files(&["a.txt", "b.txt"])).unwrap();
        let scripts = collect(batches);
        assert_eq!(scripts.len(), 1);
        let lines: Vec<&str> = scripts[0].text.lines().collect();
        let a = lines.iter().position(|l| *l == "echo a.txt").unwrap();
        let b = lines.iter().position(|l| *l == "echo b.txt").unwrap();
        assert!(a < b);
        assert_eq!(
            lines.iter().filter(|l| l.starts_with("echo ")).count(),
            2
        );
    }

    #[test]
    fn job_name_defaults_to_first_file_of_each_batch() {
        let batches =
            ScriptBatches::new(params("run {query}", 2), files(&["f1", "f2", "f3"])).unwrap();
        let scripts = collect(batches);
        assert!(scripts[0].text.contains("#SBATCH -J f1"));
        assert!(scripts[1].text.contains("#SBATCH -J f3"));
    }

    #[test]
    fn explicit_job_name_overrides_default() {
        let mut p = params("run {query}", 1);
        p.job_name = Some("myjob".to_string());
        let scripts = collect(ScriptBatches::new(p, files(&["f1", "f2"])).unwrap());
        for script in &scripts {
            assert!(script.text.contains("#SBATCH -J myjob"));
        }
    }

    #[test]
    fn optional_directives_appear_only_when_set() {
        let scripts = collect(
            ScriptBatches::new(params("run {query}", 1), files(&["f1"])).unwrap(),
        );
        let text = &scripts[0].text;
        assert!(text.contains("#SBATCH -n 1"));
        assert!(text.contains("#SBATCH -p core"));
        assert!(text.contains("#SBATCH -A "));
        assert!(text.contains("#SBATCH -t 01:00:00"));
        assert!(!text.contains("#SBATCH -N"));
        assert!(!text.contains("#SBATCH -C"));

        let mut p = params("run {query}", 1);
        p.nodes = 2;
        p.cores = 32;
        p.constraint = Some("mem128GB&usage_mail".to_string());
        let scripts = collect(ScriptBatches::new(p, files(&["f1"])).unwrap());
        let text = &scripts[0].text;
        assert!(text.contains("#SBATCH -n 32"));
        assert!(text.contains("#SBATCH -N 2"));
        assert!(text.contains("#SBATCH -C mem128GB&usage_mail"));
    }

    #[test]
    fn template_without_query_repeats_identical_line() {
        let scripts = collect(
            ScriptBatches::new(params("hostname", 2), files(&["f1", "f2"])).unwrap(),
        );
        let count = scripts[0]
            .text
            .lines()
            .filter(|l| *l == "hostname")
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_placeholder_aborts_rendering() {
        let mut batches =
            ScriptBatches::new(params("echo {nope}", 1), files(&["f1"])).unwrap();
        assert!(matches!(
            batches.next(),
            Some(Err(Error::UnknownPlaceholder { .. }))
        ));
    }

    #[test]
    fn copy_decompress_stages_and_rewrites_query() {
        let mut p = params("bowtie2 -x ref -U {query}", 1);
        p.copy_decompress = true;
        let scripts = collect(ScriptBatches::new(p, files(&["sample.fastq.gz"])).unwrap());
        let lines: Vec<&str> = scripts[0].text.lines().collect();
        let stage = lines
            .iter()
            .position(|l| *l == "gunzip -c sample.fastq.gz > $TMPDIR/sample.fastq")
            .unwrap();
        assert_eq!(lines[stage + 1], "cd $TMPDIR");
        assert_eq!(lines[stage + 2], "bowtie2 -x ref -U sample.fastq");
        // Job name and reported files keep the pre-staging name.
        assert!(scripts[0].text.contains("#SBATCH -J sample.fastq.gz"));
        assert_eq!(scripts[0].files, files(&["sample.fastq.gz"]));
    }
}
