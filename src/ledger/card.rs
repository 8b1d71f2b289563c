use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Credit card reference data, keyed by name from `Transaction::account`.
///
/// `closing_day` and `due_day` are expected in 1..=31 but are not validated
/// here; the billing-cycle resolver treats out-of-range values as absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub closing_day: u32,
    pub due_day: u32,
    pub limit: Decimal,
}

impl Card {
    pub fn new(name: impl Into<String>, closing_day: u32, due_day: u32, limit: Decimal) -> Self {
        Self {
            name: name.into(),
            closing_day,
            due_day,
            limit,
        }
    }
}
