use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings goal. Independent of the aggregation engine; only the progress
/// percentage is ever derived from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    pub color: String,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: Decimal, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target,
            current: Decimal::ZERO,
            color: color.into(),
        }
    }

    /// Progress toward the target as a percentage, 0 when the target is 0.
    pub fn progress_pct(&self) -> Decimal {
        if self.target.is_zero() {
            Decimal::ZERO
        } else {
            self.current / self.target * Decimal::from(100)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn progress_is_share_of_target() {
        let mut goal = Goal::new("Emergency fund", dec!(1000), "#34C759");
        goal.current = dec!(250);
        assert_eq!(goal.progress_pct(), dec!(25));
    }

    #[test]
    fn zero_target_reports_zero_progress() {
        let goal = Goal::new("Unset", Decimal::ZERO, "#007AFF");
        assert_eq!(goal.progress_pct(), Decimal::ZERO);
    }
}
