use super::debt::Debt;
use crate::error::Result;
use async_trait::async_trait;

/// Source of the debts a plan is computed from.
#[async_trait]
pub trait DebtRegistry: Send + Sync {
    async fn store(&self, debt: Debt) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<Debt>>;
    /// Debts with a non-zero balance, sorted by id. Negative balances are kept
    /// so that planning rejects them.
    async fn active_debts(&self) -> Result<Vec<Debt>>;
}

pub type DebtRegistryBox = Box<dyn DebtRegistry>;
