/// Outcome of comparing total spend against the configured ceiling.
///
/// `Exceeded` deliberately carries no number: when spend is over the ceiling
/// the UI must not display a remaining figure at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BudgetStatus {
    Within { remaining: f64 },
    Exceeded,
}

impl BudgetStatus {
    pub fn is_exceeded(&self) -> bool {
        matches!(self, BudgetStatus::Exceeded)
    }

    /// Remaining amount, or `None` when the budget is exceeded.
    pub fn remaining(&self) -> Option<f64> {
        match self {
            BudgetStatus::Within { remaining } => Some(*remaining),
            BudgetStatus::Exceeded => None,
        }
    }
}

/// Compares total spend against the ceiling. Purely computational; re-run
/// after every change to the full view or to the ceiling.
pub fn evaluate(total_spend: f64, ceiling: f64) -> BudgetStatus {
    if total_spend > ceiling {
        BudgetStatus::Exceeded
    } else {
        BudgetStatus::Within {
            remaining: ceiling - total_spend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_budget_reports_remaining() {
        let status = evaluate(120.0, 300.0);
        assert!(!status.is_exceeded());
        assert_eq!(status.remaining(), Some(180.0));
    }

    #[test]
    fn spend_equal_to_ceiling_is_within_with_zero_remaining() {
        let status = evaluate(300.0, 300.0);
        assert_eq!(status.remaining(), Some(0.0));
    }

    #[test]
    fn exceeded_suppresses_the_remaining_figure() {
        let status = evaluate(350.0, 300.0);
        assert!(status.is_exceeded());
        assert_eq!(status.remaining(), None);
    }

    #[test]
    fn zero_ceiling_with_any_spend_is_exceeded() {
        assert!(evaluate(0.01, 0.0).is_exceeded());
    }

    #[test]
    fn zero_ceiling_with_zero_spend_is_within() {
        assert_eq!(evaluate(0.0, 0.0).remaining(), Some(0.0));
    }
}
