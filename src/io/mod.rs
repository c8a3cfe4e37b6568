//! Input-list reading and scheduler submission.

pub mod input;
pub mod submit;

pub use input::{read_list_file, resolve_inputs};
pub use submit::{Sbatch, Submit};
