use std::path::PathBuf;
use thiserror::Error;

/// Dump failures. Read failures are per-file and never abort a run;
/// `Output` means the report itself could not be written.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl DumpError {
    /// Whether the run must stop instead of moving on to the next file
    pub fn is_fatal(&self) -> bool {
        matches!(self, DumpError::Output(_))
    }

    /// Classify an open/read error for `path`.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => DumpError::FileNotFound { path },
            _ => DumpError::Io { path, source: err },
        }
    }
}
