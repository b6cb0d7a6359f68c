use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::ordering::sorted_transactions;
use crate::parsers::format_currency;

/// Amount as its effect on the balance: `+` for gains, `-` for losses,
/// blank for zero.
fn signed_amount(symbol: &str, effect: f64) -> String {
    if effect == 0.0 {
        String::new()
    } else if effect > 0.0 {
        format!("+{}", format_currency(symbol, effect))
    } else {
        format_currency(symbol, effect)
    }
}

/// The five table cells for one transaction: date, description, reference,
/// signed debit and signed credit. A zero amount leaves its cell blank.
pub fn display_cells(tx: &Transaction, symbol: &str) -> [String; 5] {
    let debit = signed_amount(symbol, -tx.debit);
    let credit = signed_amount(symbol, tx.credit);
    [
        tx.date.clone(),
        tx.description.clone(),
        tx.reference.clone(),
        debit,
        credit,
    ]
}

pub fn dashboard(ledger: &Ledger, symbol: &str) -> Table {
    let net = ledger.net_balance();
    let net_str = if net >= 0.0 {
        format_currency(symbol, net).green().bold().to_string()
    } else {
        format_currency(symbol, net).red().bold().to_string()
    };

    let mut table = Table::new();
    table.set_header(vec!["Income", "Outcome", "Net balance", "Transactions"]);
    table.add_row(vec![
        Cell::new(format_currency(symbol, ledger.income()).green().to_string()),
        Cell::new(format_currency(symbol, ledger.outcome()).red().to_string()),
        Cell::new(net_str),
        Cell::new(ledger.len()),
    ]);
    table
}

pub fn loaded_files_label(ledger: &Ledger) -> String {
    let files = ledger.loaded_files();
    match files.len() {
        0 => "No files loaded".to_string(),
        1 => format!("1 file loaded: {}", files.iter().next().map(String::as_str).unwrap_or("")),
        n => format!(
            "{n} files loaded: {}",
            files.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
        ),
    }
}

pub fn transactions_table(ledger: &Ledger, symbol: &str, limit: Option<usize>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Reference", "Debit", "Credit"]);
    let sorted = sorted_transactions(ledger);
    let shown = limit.unwrap_or(sorted.len());
    for tx in sorted.into_iter().take(shown) {
        let [date, description, reference, debit, credit] = display_cells(tx, symbol);
        table.add_row(vec![
            Cell::new(date),
            Cell::new(description),
            Cell::new(reference),
            Cell::new(debit.red().to_string()),
            Cell::new(credit.green().to_string()),
        ]);
    }
    table
}
