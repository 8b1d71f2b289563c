pub mod json_backend;
pub mod memory;

use crate::{
    errors::LedgerError,
    ledger::{Ledger, Transaction},
};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends holding the ledger snapshot.
///
/// The engine never touches a store; callers load a snapshot, compute, and
/// write back. Append and replace default to whole-snapshot
/// read-modify-write, which is exactly what the JSON backend does anyway.
pub trait LedgerStore: Send + Sync {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;

    fn append_transaction(&self, transaction: Transaction) -> Result<()> {
        let mut ledger = self.load()?;
        ledger.add_transaction(transaction);
        self.save(&ledger)
    }

    fn replace_transactions(&self, transactions: Vec<Transaction>) -> Result<()> {
        let mut ledger = self.load()?;
        ledger.replace_transactions(transactions);
        self.save(&ledger)
    }
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStore;
