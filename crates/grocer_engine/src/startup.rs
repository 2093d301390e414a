use std::path::Path;

use grocer_core::FrequencyStore;

use crate::{load_frequencies, persist_frequencies, StoreIoError};

/// Loads the input file and writes the backup. The session must not start if this fails.
pub fn startup(input_path: &Path, backup_path: &Path) -> Result<FrequencyStore, StoreIoError> {
    let mut store = FrequencyStore::new();
    load_frequencies(&mut store, input_path)?;
    persist_frequencies(&store, backup_path)?;
    Ok(store)
}
