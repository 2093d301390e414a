use std::fmt::Write;

use thiserror::Error;

use crate::FrequencyStore;

/// A backup line that is not `<item> <count>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("backup line {line}: {reason}")]
pub struct BackupParseError {
    /// 1-based line number.
    pub line: usize,
    pub reason: String,
}

impl BackupParseError {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

impl FrequencyStore {
    /// Backup text: `<item> <count>\n` per entry, in item order.
    pub fn to_backup_string(&self) -> String {
        let mut out = String::new();
        for (item, count) in self.entries() {
            let _ = writeln!(out, "{item} {count}");
        }
        out
    }

    /// Rebuilds a store from backup text. Blank lines are skipped.
    pub fn from_backup_str(text: &str) -> Result<Self, BackupParseError> {
        let mut store = Self::new();
        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            if raw.trim().is_empty() {
                continue;
            }
            let (item, count) = raw
                .rsplit_once(' ')
                .ok_or_else(|| BackupParseError::new(line_no, "missing count"))?;
            if item.is_empty() {
                return Err(BackupParseError::new(line_no, "missing item"));
            }
            let count: u64 = count
                .parse()
                .map_err(|_| BackupParseError::new(line_no, format!("bad count {count:?}")))?;
            if count == 0 {
                return Err(BackupParseError::new(line_no, "count must be at least 1"));
            }
            if store.contains(item) {
                return Err(BackupParseError::new(line_no, format!("duplicate item {item:?}")));
            }
            store.insert_count(item.to_owned(), count);
        }
        Ok(store)
    }
}
