//! Display derivation for a successful analysis.
//!
//! Everything here is computed from the stored predictions on each render;
//! nothing is cached and the stored sequence is never modified.

use crate::config::MAX_TABLE_ROWS;
use crate::types::PredictionRow;

/// Rows rendered in the table, capped at [`MAX_TABLE_ROWS`].
pub fn visible_rows(rows: &[PredictionRow]) -> &[PredictionRow] {
    &rows[..rows.len().min(MAX_TABLE_ROWS)]
}

/// Notice shown under the table when rows were cut.
pub fn truncation_notice(total: usize) -> Option<String> {
    (total > MAX_TABLE_ROWS)
        .then(|| format!("Showing first {} of {} transactions", MAX_TABLE_ROWS, total))
}

/// `0.1234` → `"12.3%"`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Headline for the results view.
pub fn analysis_headline(total: usize, file_name: &str) -> String {
    format!("Analyzed {} transactions from {}", total, file_name)
}
