//! Copy-decompress staging fragments.
//!
//! When `--copy-decompress` is on, each input file is copied (and, for known
//! compression suffixes, decompressed) into the node-local `$TMPDIR` before
//! the main command runs on it. This module only renders the shell text for
//! that; execution happens on the cluster node when the generated script
//! runs.

use crate::types::Compression;

/// A rendered staging fragment plus the staged filename the command
/// template should use instead of the original path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Shell lines: the copy/decompress command followed by `cd $TMPDIR`.
    pub fragment: Vec<String>,
    /// Base filename inside `$TMPDIR`, compression suffix stripped.
    pub staged_name: String,
}

/// Render the staging fragment for one source path.
///
/// Unknown suffixes fall back to a plain copy with the name unchanged.
pub fn stage(source: &str) -> StagedFile {
    let base = source.rsplit('/').next().unwrap_or(source);
    let compression = Compression::classify(base);
    let staged_name = base
        .strip_suffix(compression.suffix())
        .unwrap_or(base)
        .to_string();

    let command = match compression {
        Compression::Gzip => format!("gunzip -c {source} > $TMPDIR/{staged_name}"),
        Compression::Bzip2 => format!("bunzip2 -c {source} > $TMPDIR/{staged_name}"),
        Compression::Dsrc => format!("dsrc d {source} $TMPDIR/{staged_name}"),
        Compression::None => format!("cp {source} $TMPDIR/{staged_name}"),
    };

    StagedFile {
        fragment: vec![command, "cd $TMPDIR".to_string()],
        staged_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gzip_is_decompressed_and_suffix_stripped() {
        let staged = stage("sample.fastq.gz");
        assert_eq!(staged.staged_name, "sample.fastq");
        assert_eq!(
            staged.fragment,
            vec![
                "gunzip -c sample.fastq.gz > $TMPDIR/sample.fastq".to_string(),
                "cd $TMPDIR".to_string(),
            ]
        );
    }

    #[test]
    fn bzip2_uses_bunzip2() {
        let staged = stage("reads.fq.bz2");
        assert_eq!(staged.staged_name, "reads.fq");
        assert_eq!(staged.fragment[0], "bunzip2 -c reads.fq.bz2 > $TMPDIR/reads.fq");
    }

    #[test]
    fn dsrc_uses_dsrc_decompress() {
        let staged = stage("reads.dsrc");
        assert_eq!(staged.staged_name, "reads");
        assert_eq!(staged.fragment[0], "dsrc d reads.dsrc $TMPDIR/reads");
    }

    #[test]
    fn unknown_suffix_is_plain_copied_unchanged() {
        let staged = stage("genome.fasta");
        assert_eq!(staged.staged_name, "genome.fasta");
        assert_eq!(staged.fragment[0], "cp genome.fasta $TMPDIR/genome.fasta");
    }

    #[test]
    fn directory_components_are_dropped_from_staged_name() {
        let staged = stage("/proj/data/sample.fastq.gz");
        assert_eq!(staged.staged_name, "sample.fastq");
        assert_eq!(
            staged.fragment[0],
            "gunzip -c /proj/data/sample.fastq.gz > $TMPDIR/sample.fastq"
        );
    }
}
