use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single recorded money movement.
///
/// `account` names either a [`Card`](super::Card), an
/// [`Account`](super::Account), or free text such as "Wallet"; the engine
/// resolves it fail-soft and never rejects an unknown name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub amount: Decimal,
    pub account: String,
    pub category: String,
    pub status: TransactionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Creates a transaction with a fresh time-derived id.
    pub fn new(
        date: NaiveDate,
        kind: TransactionType,
        amount: Decimal,
        account: impl Into<String>,
        category: impl Into<String>,
        status: TransactionStatus,
    ) -> Self {
        Self {
            id: next_id(),
            date,
            kind,
            amount,
            account: account.into(),
            category: category.into(),
            status,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_paid(&self) -> bool {
        matches!(self.status, TransactionStatus::Paid)
    }
}

/// Unix-timestamp ids, unique per wall-clock second like the original
/// form-driven entry flow produces.
fn next_id() -> i64 {
    Utc::now().timestamp()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionStatus {
    Paid,
    Pending,
}
