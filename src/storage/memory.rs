use std::sync::Mutex;

use crate::ledger::Ledger;

use super::{LedgerStore, Result};

/// In-memory store for exercising the engine without filesystem I/O.
#[derive(Debug, Default)]
pub struct MemoryStore {
    ledger: Mutex<Ledger>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self {
            ledger: Mutex::new(ledger),
        }
    }
}

impl LedgerStore for MemoryStore {
    fn load(&self) -> Result<Ledger> {
        let guard = self.ledger.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        let mut guard = self.ledger.lock().unwrap_or_else(|e| e.into_inner());
        *guard = ledger.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Transaction, TransactionStatus, TransactionType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn append_and_replace_round_trip() {
        let store = MemoryStore::new();
        let txn = Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            TransactionType::Income,
            dec!(10),
            "Wallet",
            "Outros",
            TransactionStatus::Paid,
        );
        store.append_transaction(txn.clone()).expect("append");
        assert_eq!(store.load().expect("load").transaction_count(), 1);

        store.replace_transactions(Vec::new()).expect("replace");
        assert_eq!(store.load().expect("load").transaction_count(), 0);
    }
}
