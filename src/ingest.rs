use std::path::{Path, PathBuf};

use crate::classifier::is_valid_data_row;
use crate::ledger::Ledger;
use crate::models::{Cell, RawRow};
use crate::normalizer::to_transaction;
use crate::reader::read_rows;

/// Label of the date column; its row marks where the data region starts.
pub const HEADER_MARKER: &str = "FECHA";

/// Index of the first row with a text cell mentioning the header marker.
pub fn find_header_row_index(rows: &[RawRow]) -> Option<usize> {
    rows.iter().position(|row| {
        row.iter()
            .filter_map(Cell::as_text)
            .any(|s| s.to_uppercase().contains(HEADER_MARKER))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngestSummary {
    pub file_name: String,
    pub header_found: bool,
    /// Rows after the header, before filtering.
    pub data_rows: usize,
    pub accepted: usize,
    pub skipped: usize,
    /// Accepted rows whose key was not in the ledger yet.
    pub new_transactions: usize,
}

/// Feed one file's rows into the ledger. A file without a header row is
/// recorded but contributes no transactions.
pub fn ingest(rows: &[RawRow], ledger: &mut Ledger, file_name: &str) -> IngestSummary {
    let header = find_header_row_index(rows);
    let data: &[RawRow] = match header {
        Some(idx) => &rows[idx + 1..],
        None => {
            log::info!("{file_name}: no header row found, nothing to import");
            &[]
        }
    };

    let transactions: Vec<_> = data
        .iter()
        .filter(|row| is_valid_data_row(row))
        .map(|row| to_transaction(row))
        .collect();
    let accepted = transactions.len();
    let new_transactions = ledger.apply_batch(file_name, transactions);

    let summary = IngestSummary {
        file_name: file_name.to_string(),
        header_found: header.is_some(),
        data_rows: data.len(),
        accepted,
        skipped: data.len() - accepted,
        new_transactions,
    };
    log::debug!(
        "{}: {} rows, {} accepted, {} skipped, {} new",
        summary.file_name,
        summary.data_rows,
        summary.accepted,
        summary.skipped,
        summary.new_transactions
    );
    summary
}

// ---------------------------------------------------------------------------
// Batch loading
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct BatchReport {
    pub summaries: Vec<IngestSummary>,
    /// Files that could not be read or decoded, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

/// Read and ingest each file in turn. A file that fails to read or decode is
/// logged and reported; it never stops the others or touches the ledger.
pub fn load_files<P: AsRef<Path>>(ledger: &mut Ledger, paths: &[P]) -> BatchReport {
    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        match read_rows(path) {
            Ok(rows) => {
                let summary = ingest(&rows, ledger, &display_name(path));
                report.summaries.push(summary);
            }
            Err(e) => {
                log::warn!("skipping {}: {e}", path.display());
                report.failures.push((path.to_path_buf(), e.to_string()));
            }
        }
    }
    report
}
