//! The aggregation engine: stateless pure computation over a ledger
//! snapshot. No component here performs I/O or retains state across calls.

pub mod billing;
pub mod kpi;
pub mod period;
pub mod report;
pub mod rollup;

pub use billing::{competence_date, month_after};
pub use kpi::KpiReport;
pub use period::{partition, DatedTransaction, PeriodPartition};
pub use report::{MonthlyReport, SpendingPulse};
pub use rollup::{GroupKey, Rollup, RollupTop};
