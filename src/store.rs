use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{BusinessPlan, PLAN_ID};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// A business plan held by the store.
#[derive(Clone, Debug)]
pub struct StoredPlan {
    pub id: String,
    pub plan: BusinessPlan,
    pub created_at: DateTime<Utc>,
}

/// Result of a seed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Inserted { id: String },
    AlreadyExists,
}

/// In-memory holder of the single business-plan document.
#[derive(Clone, Debug, Default)]
pub struct PlanStore {
    inner: Arc<RwLock<Option<StoredPlan>>>,
}

impl PlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `plan` unless a plan is already stored.
    pub async fn seed(&self, plan: &BusinessPlan) -> SeedOutcome {
        let mut slot = self.inner.write().await;
        if let Some(existing) = slot.as_ref() {
            debug!("Business plan '{}' already present, skipping seed", existing.id);
            return SeedOutcome::AlreadyExists;
        }

        let stored = StoredPlan {
            id: PLAN_ID.to_string(),
            plan: plan.clone(),
            created_at: Utc::now(),
        };
        let id = stored.id.clone();
        *slot = Some(stored);

        info!("Seeded business plan '{}'", id);
        SeedOutcome::Inserted { id }
    }

    /// Clone of the stored plan, if any.
    pub async fn current(&self) -> Option<StoredPlan> {
        self.inner.read().await.clone()
    }

    pub async fn is_seeded(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::static_plan;

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let store = PlanStore::new();
        assert!(!store.is_seeded().await);

        let first = store.seed(static_plan()).await;
        assert_eq!(first, SeedOutcome::Inserted { id: PLAN_ID.to_string() });

        let mut changed = static_plan().clone();
        changed.investment.amount = "2,000,000 RMB".to_string();
        let second = store.seed(&changed).await;
        assert_eq!(second, SeedOutcome::AlreadyExists);

        let stored = store.current().await.unwrap();
        assert_eq!(stored.plan.investment.amount, "1,500,000 RMB");
        assert_eq!(stored.id, PLAN_ID);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_slot() {
        let store = PlanStore::new();
        let handle = store.clone();
        handle.seed(static_plan()).await;
        assert!(store.is_seeded().await);
    }
}
