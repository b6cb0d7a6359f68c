use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::ledger::Ledger;
use crate::ordering::sorted_transactions;

pub const EXPORT_HEADER: [&str; 5] = ["Date", "Description", "Reference", "Debit", "Credit"];

/// Write the ledger in display order as CSV, amounts with two decimals.
/// Returns the number of transactions written.
pub fn write_csv<W: Write>(ledger: &Ledger, out: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(EXPORT_HEADER)?;
    let sorted = sorted_transactions(ledger);
    for tx in &sorted {
        let debit = format!("{:.2}", tx.debit);
        let credit = format!("{:.2}", tx.credit);
        wtr.write_record([
            tx.date.as_str(),
            tx.description.as_str(),
            tx.reference.as_str(),
            debit.as_str(),
            credit.as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(sorted.len())
}

pub fn export_to_file(ledger: &Ledger, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = std::fs::File::create(path)?;
    write_csv(ledger, std::io::BufWriter::new(file))
}
