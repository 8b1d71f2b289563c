//! Ledger domain models and persistence-friendly types.

pub mod account;
pub mod card;
pub mod goal;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use account::Account;
pub use card::Card;
pub use goal::Goal;
pub use ledger::Ledger;
pub use transaction::{Transaction, TransactionStatus, TransactionType};
