use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, TransactionType};

use super::{
    kpi::KpiReport,
    period::{partition, DatedTransaction, PeriodPartition},
    rollup::{GroupKey, Rollup, RollupTop},
};

/// How the most recent expense compares to the historical average: atypical
/// when it exceeds 1.5x the mean expense, on track otherwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SpendingPulse {
    Atypical,
    OnTrack,
}

/// Everything a dashboard needs for one reference month, computed in a
/// single pass over a ledger snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub month: u32,
    pub year: i32,
    pub partition: PeriodPartition,
    pub kpis: KpiReport,
    pub expenses_by_category: Rollup,
    /// The category consuming the largest share of the period's outflows,
    /// `None` when the period has no expenses.
    pub top_expense_category: Option<RollupTop>,
    /// Classification of the latest expense against spending history;
    /// `None` without expenses or when the latest expense is zero.
    pub spending_pulse: Option<SpendingPulse>,
}

impl MonthlyReport {
    pub fn for_month(ledger: &Ledger, month: u32, year: i32) -> Self {
        let partition = partition(&ledger.transactions, &ledger.cards, month, year);
        let kpis = KpiReport::compute(&partition);
        let expenses_by_category = Rollup::compute(
            &partition.in_period,
            GroupKey::Category,
            TransactionType::Expense,
        );
        let top_expense_category = expenses_by_category.top();
        let spending_pulse = spending_pulse(&partition.all);
        Self {
            month,
            year,
            partition,
            kpis,
            expenses_by_category,
            top_expense_category,
            spending_pulse,
        }
    }
}

/// Compares the last-entered expense of the full history to 1.5x the mean
/// expense. Rows are taken in input order, matching how entries accumulate
/// in the durable list.
fn spending_pulse(all: &[DatedTransaction]) -> Option<SpendingPulse> {
    let expenses: Vec<Decimal> = all
        .iter()
        .filter(|row| row.txn.kind == TransactionType::Expense)
        .map(|row| row.txn.amount)
        .collect();
    let latest = *expenses.last()?;
    if latest.is_zero() {
        return None;
    }
    let mean = expenses.iter().sum::<Decimal>() / Decimal::from(expenses.len() as i64);
    if latest > mean * Decimal::new(15, 1) {
        Some(SpendingPulse::Atypical)
    } else {
        Some(SpendingPulse::OnTrack)
    }
}
