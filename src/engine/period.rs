use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ledger::{Card, Transaction};

use super::billing::competence_date;

/// A transaction paired with its resolved competence date. The underlying
/// record is carried unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatedTransaction {
    pub txn: Transaction,
    pub competence: NaiveDate,
}

/// The reference month split: the full history with competence dates
/// attached, the rows attributed to the reference month, and the rows
/// attributed strictly before it. Every field is always present; an empty
/// input simply yields empty vectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodPartition {
    pub all: Vec<DatedTransaction>,
    pub in_period: Vec<DatedTransaction>,
    pub prior: Vec<DatedTransaction>,
}

/// Partitions transactions around a `(month, year)` reference using
/// competence dates.
pub fn partition(
    transactions: &[Transaction],
    cards: &[Card],
    month: u32,
    year: i32,
) -> PeriodPartition {
    let mut result = PeriodPartition::default();
    let period_start = NaiveDate::from_ymd_opt(year, month, 1);
    for txn in transactions {
        let competence = competence_date(txn, cards);
        let dated = DatedTransaction {
            txn: txn.clone(),
            competence,
        };
        if competence.year() == year && competence.month() == month {
            result.in_period.push(dated.clone());
        } else if period_start.is_some_and(|start| competence < start) {
            result.prior.push(dated.clone());
        }
        result.all.push(dated);
    }
    result
}
