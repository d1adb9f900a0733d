use crate::Expense;

/// Per-category spend totals in first-appearance order.
///
/// Derived data: recompute via [`summarize`] after every change to the full
/// view, never mutate directly. The stable ordering keeps chart bars from
/// jumping around between refreshes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    entries: Vec<(String, f64)>,
}

impl CategorySummary {
    /// Ordered `(category, amount)` pairs.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn amount_for(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, amount)| *amount)
    }

    /// Sum over all categories, i.e. the user's total spend.
    pub fn total_spend(&self) -> f64 {
        self.entries.iter().map(|(_, amount)| amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sums expense amounts per category. Pure and total: it never fails, and a
/// category whose rows all carried coerced-to-zero amounts still shows up
/// with a total of 0.
pub fn summarize(expenses: &[Expense]) -> CategorySummary {
    let mut entries: Vec<(String, f64)> = Vec::new();

    for expense in expenses {
        match entries.iter_mut().find(|(name, _)| *name == expense.category) {
            Some((_, amount)) => *amount += expense.amount,
            None => entries.push((expense.category.clone(), expense.amount)),
        }
    }

    CategorySummary { entries }
}
