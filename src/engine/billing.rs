use chrono::{Datelike, NaiveDate};

use crate::ledger::{Card, Transaction, TransactionType};

/// Resolves the accounting date a transaction is attributed to.
///
/// A card expense dated on or after the card's closing day belongs to the
/// next statement, so it rolls one calendar month forward. Everything else,
/// including income and transactions on unknown or malformed cards, keeps
/// its physical date.
pub fn competence_date(txn: &Transaction, cards: &[Card]) -> NaiveDate {
    if txn.kind != TransactionType::Expense {
        return txn.date;
    }
    let Some(card) = cards.iter().find(|card| card.name == txn.account) else {
        return txn.date;
    };
    if !(1..=31).contains(&card.closing_day) {
        tracing::debug!(
            card = %card.name,
            closing_day = card.closing_day,
            "closing day out of range, attributing to transaction date"
        );
        return txn.date;
    }
    if txn.date.day() >= card.closing_day {
        month_after(txn.date)
    } else {
        txn.date
    }
}

/// The same day-of-month one calendar month later, clamped to the target
/// month's length (Jan 31 -> Feb 28/29).
pub fn month_after(date: NaiveDate) -> NaiveDate {
    let (year, month) = match date.month() {
        12 => (date.year() + 1, 1),
        m => (date.year(), m + 1),
    };
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = match month {
        12 => (year + 1, 1),
        m => (year, m + 1),
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
