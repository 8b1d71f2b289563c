use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};

use crate::ledger::{TransactionStatus, TransactionType};

use super::period::{DatedTransaction, PeriodPartition};

/// Balance, burn and projection figures for one reference month.
///
/// Numeric fields default to zero rather than going absent, so an empty
/// ledger still produces a fully populated report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct KpiReport {
    /// Realized balance carried in from before the period; paid rows only,
    /// pending items never retroactively affect a closed period.
    pub starting_balance: Decimal,
    pub period_income_total: Decimal,
    pub period_expense_total: Decimal,
    pub period_income_paid: Decimal,
    pub period_expense_paid: Decimal,
    /// Realized cash position; excludes pending items.
    pub current_balance: Decimal,
    /// Balance if every pending item clears.
    pub projected_balance: Decimal,
    pub pending_expense_total: Decimal,
    /// Average period expense per active day of the full history.
    pub burn_rate: Decimal,
    /// Days the current balance sustains the burn rate. Negative when the
    /// balance is already below water; deliberately not clamped.
    pub runway_days: i64,
    pub savings_rate_pct: Decimal,
    /// Burn rate extrapolated over 30 days.
    pub monthly_projection: Decimal,
}

impl KpiReport {
    pub fn compute(partition: &PeriodPartition) -> Self {
        let starting_balance = sum(&partition.prior, TransactionType::Income, true)
            - sum(&partition.prior, TransactionType::Expense, true);
        let period_income_total = sum(&partition.in_period, TransactionType::Income, false);
        let period_expense_total = sum(&partition.in_period, TransactionType::Expense, false);
        let period_income_paid = sum(&partition.in_period, TransactionType::Income, true);
        let period_expense_paid = sum(&partition.in_period, TransactionType::Expense, true);
        let current_balance = starting_balance + period_income_paid - period_expense_paid;
        let projected_balance = starting_balance + period_income_total - period_expense_total;
        let pending_expense_total = partition
            .in_period
            .iter()
            .filter(|row| {
                row.txn.kind == TransactionType::Expense
                    && row.txn.status == TransactionStatus::Pending
            })
            .map(|row| row.txn.amount)
            .sum();

        let burn_rate = if period_expense_total.is_zero() {
            Decimal::ZERO
        } else {
            period_expense_total / Decimal::from(active_days(&partition.all))
        };
        let runway_days = if burn_rate > Decimal::ZERO {
            (current_balance / burn_rate).floor().to_i64().unwrap_or(0)
        } else {
            0
        };
        let savings_rate_pct = if period_income_total > Decimal::ZERO {
            (period_income_total - period_expense_total) / period_income_total
                * Decimal::from(100)
        } else {
            Decimal::ZERO
        };

        Self {
            starting_balance,
            period_income_total,
            period_expense_total,
            period_income_paid,
            period_expense_paid,
            current_balance,
            projected_balance,
            pending_expense_total,
            burn_rate,
            runway_days,
            savings_rate_pct,
            monthly_projection: burn_rate * Decimal::from(30),
        }
    }
}

fn sum(rows: &[DatedTransaction], kind: TransactionType, paid_only: bool) -> Decimal {
    rows.iter()
        .filter(|row| row.txn.kind == kind && (!paid_only || row.txn.is_paid()))
        .map(|row| row.txn.amount)
        .sum()
}

/// Span of the full transaction history in days, inclusive of both ends.
/// A single-day (or empty) history counts as one active day.
fn active_days(all: &[DatedTransaction]) -> i64 {
    let dates = all.iter().map(|row| row.txn.date);
    match (dates.clone().min(), dates.max()) {
        (Some(first), Some(last)) => (last - first).num_days() + 1,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::period::partition;
    use crate::ledger::Transaction;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn txn(
        date: (i32, u32, u32),
        kind: TransactionType,
        amount: Decimal,
        status: TransactionStatus,
    ) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            kind,
            amount,
            "Wallet",
            "Outros",
            status,
        )
    }

    #[test]
    fn empty_ledger_reports_all_zeroes() {
        let report = KpiReport::compute(&partition(&[], &[], 1, 2024));
        assert_eq!(report, KpiReport::default());
    }

    #[test]
    fn pending_prior_rows_do_not_move_the_starting_balance() {
        let transactions = vec![
            txn(
                (2023, 12, 1),
                TransactionType::Income,
                dec!(1000),
                TransactionStatus::Paid,
            ),
            txn(
                (2023, 12, 15),
                TransactionType::Expense,
                dec!(900),
                TransactionStatus::Pending,
            ),
        ];
        let report = KpiReport::compute(&partition(&transactions, &[], 1, 2024));
        assert_eq!(report.starting_balance, dec!(1000));
    }

    #[test]
    fn balance_conservation_holds() {
        let transactions = vec![
            txn(
                (2023, 12, 1),
                TransactionType::Income,
                dec!(500),
                TransactionStatus::Paid,
            ),
            txn(
                (2024, 1, 3),
                TransactionType::Income,
                dec!(2000),
                TransactionStatus::Paid,
            ),
            txn(
                (2024, 1, 10),
                TransactionType::Expense,
                dec!(350),
                TransactionStatus::Paid,
            ),
            txn(
                (2024, 1, 20),
                TransactionType::Expense,
                dec!(120),
                TransactionStatus::Pending,
            ),
        ];
        let report = KpiReport::compute(&partition(&transactions, &[], 1, 2024));
        assert_eq!(
            report.current_balance - report.starting_balance,
            report.period_income_paid - report.period_expense_paid
        );
        assert_eq!(report.pending_expense_total, dec!(120));
        assert_eq!(report.projected_balance, dec!(500) + dec!(2000) - dec!(470));
    }

    #[test]
    fn burn_rate_spans_the_full_history() {
        // History runs Dec 1 .. Jan 10 = 41 active days.
        let transactions = vec![
            txn(
                (2023, 12, 1),
                TransactionType::Income,
                dec!(100),
                TransactionStatus::Paid,
            ),
            txn(
                (2024, 1, 10),
                TransactionType::Expense,
                dec!(82),
                TransactionStatus::Paid,
            ),
        ];
        let report = KpiReport::compute(&partition(&transactions, &[], 1, 2024));
        assert_eq!(report.burn_rate, dec!(2));
        assert_eq!(report.monthly_projection, dec!(60));
    }

    #[test]
    fn single_day_history_counts_one_active_day() {
        let transactions = vec![txn(
            (2024, 1, 5),
            TransactionType::Expense,
            dec!(30),
            TransactionStatus::Paid,
        )];
        let report = KpiReport::compute(&partition(&transactions, &[], 1, 2024));
        assert_eq!(report.burn_rate, dec!(30));
    }

    #[test]
    fn runway_may_go_negative() {
        let transactions = vec![
            txn(
                (2023, 12, 1),
                TransactionType::Expense,
                dec!(500),
                TransactionStatus::Paid,
            ),
            txn(
                (2024, 1, 1),
                TransactionType::Expense,
                dec!(320),
                TransactionStatus::Paid,
            ),
        ];
        let report = KpiReport::compute(&partition(&transactions, &[], 1, 2024));
        assert!(report.current_balance < Decimal::ZERO);
        assert!(report.runway_days < 0);
    }

    #[test]
    fn zero_income_gives_zero_savings_rate() {
        let transactions = vec![txn(
            (2024, 1, 5),
            TransactionType::Expense,
            dec!(30),
            TransactionStatus::Paid,
        )];
        let report = KpiReport::compute(&partition(&transactions, &[], 1, 2024));
        assert_eq!(report.savings_rate_pct, Decimal::ZERO);
    }

    #[test]
    fn savings_rate_reflects_retained_income() {
        let transactions = vec![
            txn(
                (2024, 1, 1),
                TransactionType::Income,
                dec!(4000),
                TransactionStatus::Paid,
            ),
            txn(
                (2024, 1, 10),
                TransactionType::Expense,
                dec!(1000),
                TransactionStatus::Pending,
            ),
        ];
        let report = KpiReport::compute(&partition(&transactions, &[], 1, 2024));
        assert_eq!(report.savings_rate_pct, dec!(75));
    }
}
