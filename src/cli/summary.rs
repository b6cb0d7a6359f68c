use crate::cli::load_ledger;
use crate::error::Result;
use crate::render::{dashboard, loaded_files_label};
use crate::settings::load_settings;

pub fn run(files: &[String]) -> Result<()> {
    let settings = load_settings();
    let ledger = load_ledger(files);
    println!("\n{}", loaded_files_label(&ledger));
    println!("{}", dashboard(&ledger, &settings.currency_symbol));
    Ok(())
}
