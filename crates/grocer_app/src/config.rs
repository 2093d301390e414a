//! Optional `grocer.ron` configuration in the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const CONFIG_FILENAME: &str = "grocer.ron";
pub const DEFAULT_INPUT_FILE: &str = "CS210_Project_Three_Input_File.txt";
pub const DEFAULT_BACKUP_FILE: &str = "frequency.dat";

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum LogDestination {
    /// Write to ./grocer.log in the current directory.
    #[default]
    File,
    /// Write to stderr; stdout stays reserved for the menu.
    Stderr,
    Off,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GrocerConfig {
    pub input_path: PathBuf,
    pub backup_path: PathBuf,
    pub histogram_symbol: char,
    pub log: LogDestination,
}

impl Default for GrocerConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            backup_path: PathBuf::from(DEFAULT_BACKUP_FILE),
            histogram_symbol: '*',
            log: LogDestination::default(),
        }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
    /// The file exists but could not be used; defaults apply.
    Fallback { path: PathBuf, reason: String },
}

/// Reads `grocer.ron` from `dir`. A missing file means defaults; a bad one
/// falls back to defaults and reports why.
pub fn load_config(dir: &Path) -> (GrocerConfig, ConfigSource) {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return (GrocerConfig::default(), ConfigSource::Defaults);
        }
        Err(err) => {
            let reason = err.to_string();
            return (GrocerConfig::default(), ConfigSource::Fallback { path, reason });
        }
    };

    match ron::from_str::<GrocerConfig>(&content) {
        Ok(config) => (config, ConfigSource::File(path)),
        Err(err) => {
            let reason = err.to_string();
            (GrocerConfig::default(), ConfigSource::Fallback { path, reason })
        }
    }
}
