use std::path::PathBuf;

use thiserror::Error;

/// Fatal ingestion failures. A malformed cell is never an error here; only an
/// absent or unreadable input aborts the run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing input files in {}: {}", dir.display(), missing.join(", "))]
    MissingInputs { dir: PathBuf, missing: Vec<String> },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
