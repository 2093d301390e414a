use std::io;
use std::path::PathBuf;

use grocer_core::BackupParseError;
use thiserror::Error;

/// File failure while loading or persisting frequencies. Each variant names the path.
#[derive(Debug, Error)]
pub enum StoreIoError {
    #[error("cannot open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create backup file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error while writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed backup file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: BackupParseError,
    },
}

impl StoreIoError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            StoreIoError::Open { path, .. }
            | StoreIoError::Read { path, .. }
            | StoreIoError::Create { path, .. }
            | StoreIoError::Write { path, .. }
            | StoreIoError::Parse { path, .. } => path,
        }
    }
}
