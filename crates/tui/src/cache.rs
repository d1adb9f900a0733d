use api_types::expense::ExpenseDto;
use engine::{Expense, ExpenseSnapshot, ExpenseViews};

use crate::{
    client::{Client, ClientError},
    session::SessionContext,
};

/// Local holder of the two server views (page slice + full set).
///
/// `load` replaces both views atomically; a failed load leaves the previous
/// state in place, stale but consistent. `remove` follows the
/// confirm-then-apply policy: the views mutate only after the server
/// acknowledged the delete.
#[derive(Debug)]
pub struct ExpenseCache {
    client: Client,
    session: SessionContext,
    views: ExpenseViews,
    load_seq: u64,
    applied_seq: u64,
}

impl ExpenseCache {
    pub fn new(client: Client, session: SessionContext) -> Self {
        Self {
            client,
            session,
            views: ExpenseViews::new(),
            load_seq: 0,
            applied_seq: 0,
        }
    }

    pub fn views(&self) -> &ExpenseViews {
        &self.views
    }

    /// Fetches `page` and replaces both views in one step.
    ///
    /// Every load gets a monotonic sequence number; a response belonging to a
    /// load that was superseded while in flight is dropped instead of
    /// clobbering newer data.
    pub async fn load(&mut self, page: u64, limit: u64) -> Result<(), ClientError> {
        let seq = self.begin_load();

        let response = self
            .client
            .expenses_list(&self.session.user_id, page, limit)
            .await?;

        if !self.is_current(seq) {
            tracing::debug!(seq, latest = self.load_seq, "dropping stale page load");
            return Ok(());
        }

        self.views.apply_snapshot(ExpenseSnapshot {
            page_view: response.data.into_iter().map(map_expense).collect(),
            full_view: response.all_data.into_iter().map(map_expense).collect(),
            total_count: response.total_count,
        });
        self.applied_seq = seq;
        Ok(())
    }

    /// Deletes `id` on the server, then removes it from both views and
    /// decrements the count. On failure nothing local changes.
    pub async fn remove(&mut self, id: &str) -> Result<(), ClientError> {
        self.client
            .expense_delete(id, &self.session.user_id)
            .await?;
        self.views.remove(id);
        Ok(())
    }

    fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.load_seq
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.load_seq
    }
}

fn map_expense(dto: ExpenseDto) -> Expense {
    Expense {
        id: dto.id,
        item: dto.item,
        category: dto.category,
        amount: dto.amount,
        date: dto.date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache() -> ExpenseCache {
        let client = Client::new("http://127.0.0.1:4000").unwrap();
        ExpenseCache::new(client, SessionContext::new("alice"))
    }

    fn expense(id: &str) -> Expense {
        Expense {
            id: id.to_string(),
            item: format!("item-{id}"),
            category: "Misc".to_string(),
            amount: 1.0,
            date: chrono::Utc::now(),
        }
    }

    #[test]
    fn superseded_load_is_not_current() {
        let mut cache = cache();

        let first = cache.begin_load();
        let second = cache.begin_load();

        assert!(!cache.is_current(first));
        assert!(cache.is_current(second));
    }

    #[tokio::test]
    async fn failed_remove_leaves_both_views_and_the_count_unchanged() {
        // Nothing listens on port 1, so the delete never reaches a server.
        let client = Client::new("http://127.0.0.1:1").unwrap();
        let mut cache = ExpenseCache::new(client, SessionContext::new("alice"));
        cache.views.apply_snapshot(ExpenseSnapshot {
            page_view: vec![expense("a"), expense("b")],
            full_view: vec![expense("a"), expense("b"), expense("c")],
            total_count: 3,
        });

        let outcome = cache.remove("a").await;

        assert!(outcome.is_err());
        assert_eq!(cache.views().page_view().len(), 2);
        assert_eq!(cache.views().full_view().len(), 3);
        assert_eq!(cache.views().total_count(), 3);
    }

    #[test]
    fn dto_maps_onto_the_semantic_entity() {
        let dto = ExpenseDto {
            id: "66f1a2".to_string(),
            item: "Groceries".to_string(),
            category: "Food".to_string(),
            amount: 42.5,
            date: chrono::Utc::now(),
        };

        let expense = map_expense(dto);

        assert_eq!(expense.id, "66f1a2");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.amount, 42.5);
    }
}
