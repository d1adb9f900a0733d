use chrono::{DateTime, Utc};

/// A single expense as the dashboard sees it.
///
/// Immutable once fetched; the only mutation in this flow is removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// Server-assigned opaque identifier, unique per user.
    pub id: String,
    pub item: String,
    /// Free-form tag, not validated against a closed set.
    pub category: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
}

/// One replacement payload for both views, applied in a single step.
#[derive(Debug, Clone, Default)]
pub struct ExpenseSnapshot {
    pub page_view: Vec<Expense>,
    pub full_view: Vec<Expense>,
    pub total_count: u64,
}

/// The two coexisting views over the server's expense table.
///
/// `page_view` is the current page slice (newest first) and feeds the table;
/// `full_view` is the complete set and feeds aggregation. Every mutation
/// touches both views inside one call, so consumers never observe a state
/// where the views disagree about whether an expense exists.
#[derive(Debug, Default)]
pub struct ExpenseViews {
    page_view: Vec<Expense>,
    full_view: Vec<Expense>,
    total_count: u64,
}

impl ExpenseViews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page_view(&self) -> &[Expense] {
        &self.page_view
    }

    pub fn full_view(&self) -> &[Expense] {
        &self.full_view
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Replaces both views and the total count atomically.
    pub fn apply_snapshot(&mut self, snapshot: ExpenseSnapshot) {
        debug_assert!(
            snapshot
                .page_view
                .iter()
                .all(|e| snapshot.full_view.iter().any(|f| f.id == e.id)),
            "page view must be a subset of the full view"
        );
        self.page_view = snapshot.page_view;
        self.full_view = snapshot.full_view;
        self.total_count = snapshot.total_count;
    }

    /// Removes `id` from both views and decrements the total count.
    ///
    /// Call this only after the server confirmed the delete. Returns `false`
    /// (and changes nothing) when the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.full_view.iter().any(|e| e.id == id) {
            return false;
        }
        self.page_view.retain(|e| e.id != id);
        self.full_view.retain(|e| e.id != id);
        self.total_count = self.total_count.saturating_sub(1);
        true
    }

    /// Drops both views, e.g. on logout.
    pub fn clear(&mut self) {
        self.page_view.clear();
        self.full_view.clear();
        self.total_count = 0;
    }
}
