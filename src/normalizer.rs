use crate::models::{
    cell_at, Cell, Transaction, COL_CREDIT, COL_DATE, COL_DEBIT, COL_DESCRIPTION, COL_REFERENCE,
};
use crate::parsers::{parse_amount, parse_date};

/// Identity used to collapse the same movement seen in overlapping exports.
pub fn dedup_key(date: &str, description: &str, reference: &str, debit: f64, credit: f64) -> String {
    // -0.0 and 0.0 must share a key.
    let (debit, credit) = (debit + 0.0, credit + 0.0);
    format!("{date}|{description}|{reference}|{debit}|{credit}")
}

/// Map a data row onto a transaction. Pure: the same row always yields the
/// same transaction and key.
pub fn to_transaction(row: &[Cell]) -> Transaction {
    let date = parse_date(cell_at(row, COL_DATE));
    let description = cell_at(row, COL_DESCRIPTION).display_text().trim().to_string();
    let reference = cell_at(row, COL_REFERENCE).display_text().trim().to_string();
    let debit = parse_amount(cell_at(row, COL_DEBIT));
    let credit = parse_amount(cell_at(row, COL_CREDIT));
    let key = dedup_key(&date, &description, &reference, debit, credit);
    Transaction {
        date,
        description,
        reference,
        debit,
        credit,
        key,
    }
}
