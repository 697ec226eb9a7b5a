//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};
use serde::Serialize;

/// Check results for a single resource file.
#[derive(Debug, Serialize)]
pub struct FileSummary {
    /// Path as given on the command line.
    pub path: String,
    /// Number of string resources.
    pub strings: usize,
    /// Number of plural resources.
    pub plurals: usize,
    /// Error message, if the file failed to load.
    pub error: Option<String>,
}

/// Format check results as an ASCII table.
pub fn format_check_table(summaries: &[FileSummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Strings", "Plurals", "Status"]);

    for summary in summaries {
        table.add_row(vec![
            summary.path.clone(),
            summary.strings.to_string(),
            summary.plurals.to_string(),
            summary.error.clone().unwrap_or_else(|| "ok".to_string()),
        ]);
    }

    table
}
