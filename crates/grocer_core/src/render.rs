use std::fmt::Write;

use crate::FrequencyStore;

/// Shown instead of rows when the store holds nothing.
pub const NO_DATA_LINE: &str = "(No data loaded)";
pub const DEFAULT_HISTOGRAM_SYMBOL: char = '*';

impl FrequencyStore {
    /// One `<item padded><count>` line per entry.
    pub fn render_all(&self) -> String {
        self.render_rows(|count| count.to_string())
    }

    /// One `<item padded><symbol x count>` line per entry.
    pub fn render_histogram(&self, symbol: char) -> String {
        self.render_rows(|count| {
            let repeat = usize::try_from(count).unwrap_or(usize::MAX);
            std::iter::repeat(symbol).take(repeat).collect()
        })
    }

    fn render_rows(&self, cell: impl Fn(u64) -> String) -> String {
        if self.is_empty() {
            return format!("{NO_DATA_LINE}\n");
        }
        let width = self.column_width();
        let mut out = String::new();
        for (item, count) in self.entries() {
            let _ = writeln!(out, "{item:<width$}{}", cell(count));
        }
        out
    }
}
