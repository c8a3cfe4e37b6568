//! Command Line Interface (CLI) layer for parbatch.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that resolves the input file
//! list, generates one job script per stack, and submits or prints each
//! one. It wires user-provided options to the underlying library
//! functionality exposed via `parbatch::api`.
//!
//! If you are embedding parbatch into another application, prefer using
//! the high-level `parbatch::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
