use serde::{Deserialize, Serialize};

use super::{account::Account, card::Card, goal::Goal, transaction::Transaction};

/// The persisted snapshot: the transaction list plus the reference data
/// consulted (never mutated) by the aggregation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> i64 {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    /// Replaces the whole transaction list, the edit/delete path used by
    /// form-driven callers.
    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn card(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.name == name)
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }
}
