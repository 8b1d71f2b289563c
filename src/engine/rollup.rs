use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::TransactionType;

use super::period::DatedTransaction;

/// Which transaction field a rollup groups by.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GroupKey {
    Category,
    Account,
}

/// Summed amounts grouped by category or account, in first-encountered
/// input order. The ordering is observable: ties for [`Rollup::top`] break
/// toward the key seen first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rollup {
    pub entries: Vec<(String, Decimal)>,
}

/// The dominant group of a rollup and its share of the rollup total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollupTop {
    pub key: String,
    pub amount: Decimal,
    pub share_pct: Decimal,
}

impl Rollup {
    /// Groups `rows` of the given `kind` by `key` and sums their amounts.
    pub fn compute(rows: &[DatedTransaction], key: GroupKey, kind: TransactionType) -> Self {
        let mut rollup = Rollup::default();
        for row in rows.iter().filter(|row| row.txn.kind == kind) {
            let group = match key {
                GroupKey::Category => &row.txn.category,
                GroupKey::Account => &row.txn.account,
            };
            match rollup.entries.iter_mut().find(|(name, _)| name == group) {
                Some((_, total)) => *total += row.txn.amount,
                None => rollup.entries.push((group.clone(), row.txn.amount)),
            }
        }
        rollup
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    /// The largest group, or `None` for an empty rollup. Strictly-greater
    /// comparison over the stable entry order keeps ties on the first key.
    pub fn top(&self) -> Option<RollupTop> {
        let (key, amount) = self
            .entries
            .iter()
            .fold(None::<&(String, Decimal)>, |best, entry| match best {
                Some(current) if entry.1 <= current.1 => best,
                _ => Some(entry),
            })?;
        let total = self.total();
        let share_pct = if total.is_zero() {
            Decimal::ZERO
        } else {
            *amount / total * Decimal::from(100)
        };
        Some(RollupTop {
            key: key.clone(),
            amount: *amount,
            share_pct,
        })
    }
}
