use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::ledger::Ledger;
use crate::models::Transaction;

/// Parse a `DD/MM/YYYY` display date. Anything else is `None`.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let d: u32 = parts[0].parse().ok()?;
    let m: u32 = parts[1].parse().ok()?;
    let y: i32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}

/// Most recent first; undated transactions after every dated one.
fn newest_first(a: &Option<NaiveDate>, b: &Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// All ledger transactions in display order. The sort is stable over the
/// ledger's key order, so equal dates come out the same way every call.
pub fn sorted_transactions(ledger: &Ledger) -> Vec<&Transaction> {
    let mut keyed: Vec<(Option<NaiveDate>, &Transaction)> = ledger
        .transactions()
        .map(|t| (parse_display_date(&t.date), t))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| newest_first(a, b));
    keyed.into_iter().map(|(_, t)| t).collect()
}
