use crate::domain::debt::Debt;
use crate::domain::ports::DebtRegistry;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory debt registry.
///
/// Uses `Arc<RwLock<HashMap<String, Debt>>>` so clones share the same debts.
/// Storing a debt with an existing id replaces it.
#[derive(Default, Clone)]
pub struct InMemoryDebtRegistry {
    debts: Arc<RwLock<HashMap<String, Debt>>>,
}

impl InMemoryDebtRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DebtRegistry for InMemoryDebtRegistry {
    async fn store(&self, debt: Debt) -> Result<()> {
        let mut debts = self.debts.write().await;
        debts.insert(debt.id.clone(), debt);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Debt>> {
        let debts = self.debts.read().await;
        Ok(debts.get(id).cloned())
    }

    async fn active_debts(&self) -> Result<Vec<Debt>> {
        let debts = self.debts.read().await;
        let mut active: Vec<Debt> = debts
            .values()
            .filter(|d| !d.remaining_amount.is_zero())
            .cloned()
            .collect();
        active.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(active)
    }
}
