use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the snapshot directory scan. These are the only fatal errors:
/// anything below a host directory degrades to "unavailable" instead.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Snapshot root {} does not exist", .path.display())]
    RootMissing { path: PathBuf },

    #[error("Snapshot root {} is not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ScanResult<T> = std::result::Result<T, ScanError>;
