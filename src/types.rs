//! Shared types and enums used across parbatch.
//! Includes the Slurm `Partition` selection and the `Compression`
//! classification used by copy-decompress staging.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Slurm partitions accepted by `-p`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Partition {
    Core,
    Node,
    Devel,
    Devcore,
}

impl std::fmt::Display for Partition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Partition::Core => "core",
            Partition::Node => "node",
            Partition::Devel => "devel",
            Partition::Devcore => "devcore",
        };
        write!(f, "{}", s)
    }
}

/// Compression format of an input file, classified by filename suffix.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Compression {
    Gzip,
    Bzip2,
    Dsrc,
    None,
}

impl Compression {
    /// Classify a path by its filename suffix.
    pub fn classify(path: &str) -> Compression {
        if path.ends_with(".gz") {
            Compression::Gzip
        } else if path.ends_with(".bz2") {
            Compression::Bzip2
        } else if path.ends_with(".dsrc") {
            Compression::Dsrc
        } else {
            Compression::None
        }
    }

    /// The suffix stripped from a staged filename, empty for plain files.
    pub fn suffix(&self) -> &'static str {
        match self {
            Compression::Gzip => ".gz",
            Compression::Bzip2 => ".bz2",
            Compression::Dsrc => ".dsrc",
            Compression::None => "",
        }
    }
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::Gzip => write!(f, "gzip"),
            Compression::Bzip2 => write!(f, "bzip2"),
            Compression::Dsrc => write!(f, "dsrc"),
            Compression::None => write!(f, "none"),
        }
    }
}
