use crate::cli::load_ledger;
use crate::error::Result;
use crate::render::{dashboard, loaded_files_label, transactions_table};
use crate::settings::load_settings;

pub fn run(files: &[String], limit: Option<usize>) -> Result<()> {
    let settings = load_settings();
    let ledger = load_ledger(files);
    println!("\n{}", loaded_files_label(&ledger));
    println!("{}", dashboard(&ledger, &settings.currency_symbol));

    if ledger.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }
    let limit = limit.or(settings.list_limit);
    println!("{}", transactions_table(&ledger, &settings.currency_symbol, limit));
    if let Some(n) = limit.filter(|n| *n < ledger.len()) {
        println!("Showing {n} of {} transactions.", ledger.len());
    }
    Ok(())
}
