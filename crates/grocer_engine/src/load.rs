use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use grocer_core::FrequencyStore;
use grocer_logging::{grocer_debug, grocer_info, grocer_warn};

use crate::StoreIoError;

/// Counts every item read from `reader`, line by line.
///
/// Bytes that are not UTF-8 are decoded lossily so odd input never aborts a load.
/// Returns the new store and the number of tokens counted.
pub fn count_reader<R: BufRead>(mut reader: R) -> io::Result<(FrequencyStore, usize)> {
    let mut store = FrequencyStore::new();
    let mut counted = 0;
    let mut line = Vec::new();
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        counted += store.record_text(&String::from_utf8_lossy(&line));
    }
    Ok((store, counted))
}

/// Replaces the contents of `store` with the item counts found in `path`.
///
/// The store is cleared before the file is opened, so on any error it is left empty.
pub fn load_frequencies(store: &mut FrequencyStore, path: &Path) -> Result<usize, StoreIoError> {
    store.clear();

    let file = File::open(path).map_err(|source| StoreIoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let (loaded, counted) =
        count_reader(BufReader::new(file)).map_err(|source| StoreIoError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    *store = loaded;

    if store.is_empty() {
        grocer_warn!("No items found in {:?}", path);
    }
    grocer_info!(
        "Loaded {} tokens ({} distinct items) from {:?}",
        counted,
        store.len(),
        path
    );
    Ok(counted)
}

/// Reads a backup file written by [`crate::persist_frequencies`] back into a store.
pub fn load_backup(path: &Path) -> Result<FrequencyStore, StoreIoError> {
    let mut file = File::open(path).map_err(|source| StoreIoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| StoreIoError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let store = FrequencyStore::from_backup_str(&String::from_utf8_lossy(&bytes)).map_err(
        |source| StoreIoError::Parse {
            path: path.to_path_buf(),
            source,
        },
    )?;
    grocer_debug!("Read {} backup entries from {:?}", store.len(), path);
    Ok(store)
}
