use std::io::{self, Write};
use std::path::{Path, PathBuf};

use grocer_core::FrequencyStore;
use grocer_logging::grocer_info;
use tempfile::NamedTempFile;

use crate::StoreIoError;

/// Atomically replaces a file by writing a sibling temp file and renaming it over the target.
///
/// A failed write never leaves a truncated target behind.
pub struct AtomicFileWriter {
    target: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn write(&self, content: &str) -> Result<(), StoreIoError> {
        let dir = match self.target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| self.create_error(source))?;
        write_synced(&mut tmp, content).map_err(|source| StoreIoError::Write {
            path: self.target.clone(),
            source,
        })?;

        tmp.persist(&self.target)
            .map_err(|e| self.create_error(e.error))?;
        Ok(())
    }

    fn create_error(&self, source: io::Error) -> StoreIoError {
        StoreIoError::Create {
            path: self.target.clone(),
            source,
        }
    }
}

fn write_synced(tmp: &mut NamedTempFile, content: &str) -> io::Result<()> {
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()
}

/// Writes the backup file: one `<item> <count>` line per entry, sorted by item.
/// Any existing file at `path` is replaced.
pub fn persist_frequencies(store: &FrequencyStore, path: &Path) -> Result<(), StoreIoError> {
    AtomicFileWriter::new(path.to_path_buf()).write(&store.to_backup_string())?;
    grocer_info!("Wrote {} backup entries to {:?}", store.len(), path);
    Ok(())
}
