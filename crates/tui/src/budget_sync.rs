use crate::{
    client::{Client, ClientError},
    session::SessionContext,
};

/// Write-through bridge between the locally edited ceiling and the remote
/// store.
///
/// Edits apply locally first so budget evaluation never waits on the
/// network; the remote write is fire-and-forget. Rapid edits produce one
/// outbound write each, unordered relative to each other; the last local
/// value always wins locally. Write failures are logged, not surfaced, and
/// never retried (documented limitation).
#[derive(Debug)]
pub struct BudgetBridge {
    client: Client,
    session: SessionContext,
    ceiling: f64,
}

impl BudgetBridge {
    pub fn new(client: Client, session: SessionContext) -> Self {
        Self {
            client,
            session,
            ceiling: 0.0,
        }
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Pulls the stored ceiling. A user without one stays at zero; the
    /// client never invents a ceiling locally.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.ceiling = self.client.budget_get(&self.session.user_id).await?;
        Ok(())
    }

    /// Applies `value` locally and kicks off the remote write.
    pub fn set_ceiling(&mut self, value: f64) {
        self.ceiling = value;

        let client = self.client.clone();
        let user_id = self.session.user_id.clone();
        tokio::spawn(async move {
            if let Err(err) = client.budget_set(&user_id, value).await {
                tracing::warn!(error = ?err, "budget write-through failed");
            }
        });
    }
}
