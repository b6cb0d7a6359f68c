use std::path::PathBuf;

use crate::cli::load_ledger;
use crate::error::Result;
use crate::export::export_to_file;

pub fn run(files: &[String], output: &str) -> Result<()> {
    let ledger = load_ledger(files);
    let path = PathBuf::from(output);
    let written = export_to_file(&ledger, &path)?;
    println!("Wrote {written} transactions to {}", path.display());
    Ok(())
}
