use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds for line buffer operations.
///
/// Every error is recovered at the operation boundary and reported to the
/// caller as a value; none of them terminate the command loop. A declined
/// overwrite or exit confirmation is not an error, see
/// [`SaveOutcome`](crate::buffer::SaveOutcome).
#[derive(Debug, Error)]
pub enum EditError {
    #[error("empty input: a non-empty line is required")]
    EmptyInput,

    #[error("line number {position} is out of range (valid: 1..={max})")]
    OutOfRange { position: usize, max: usize },

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("cannot read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
