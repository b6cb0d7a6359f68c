use std::collections::{BTreeMap, BTreeSet};

use crate::models::Transaction;

/// Deduplicated transactions plus the totals derived from them.
///
/// One ledger is created per session and handed to whoever ingests and
/// renders. `income` and `outcome` are recomputed from the full set after
/// every change, never patched incrementally.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: BTreeMap<String, Transaction>,
    loaded_files: BTreeSet<String>,
    income: f64,
    outcome: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `file_name` and upsert its transactions, then refresh totals.
    /// Returns how many keys were not already present.
    pub fn apply_batch<I>(&mut self, file_name: &str, batch: I) -> usize
    where
        I: IntoIterator<Item = Transaction>,
    {
        self.record_file(file_name);
        let mut added = 0;
        for tx in batch {
            if self.upsert(tx) {
                added += 1;
            }
        }
        self.recompute_totals();
        added
    }

    /// Insert or overwrite by dedup key. Returns true when the key was new.
    fn upsert(&mut self, tx: Transaction) -> bool {
        self.transactions.insert(tx.key.clone(), tx).is_none()
    }

    fn record_file(&mut self, file_name: &str) {
        self.loaded_files.insert(file_name.to_string());
    }

    // `+ 0.0` turns the `-0.0` an empty f64 sum yields into `0.0`.
    fn recompute_totals(&mut self) {
        self.income = self.transactions.values().map(|t| t.credit).sum::<f64>() + 0.0;
        self.outcome = self.transactions.values().map(|t| t.debit).sum::<f64>() + 0.0;
    }

    pub fn reset(&mut self) {
        self.transactions.clear();
        self.loaded_files.clear();
        self.income = 0.0;
        self.outcome = 0.0;
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn outcome(&self) -> f64 {
        self.outcome
    }

    pub fn net_balance(&self) -> f64 {
        self.income - self.outcome
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Transactions in key order. Display order lives in `ordering`.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.values()
    }

    pub fn loaded_files(&self) -> &BTreeSet<String> {
        &self.loaded_files
    }
}
