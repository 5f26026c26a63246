use super::comparison::{StrategyComparison, compare_strategies};
use super::simulator::simulate;
use crate::config::SimulationConfig;
use crate::domain::debt::Debt;
use crate::domain::money::Money;
use crate::domain::ports::DebtRegistryBox;
use crate::domain::schedule::StrategyResult;
use crate::domain::strategy::Strategy;
use crate::error::Result;

/// The main entry point for building payoff plans.
///
/// `PayoffPlanner` owns the debt registry and the simulation settings. Every
/// call takes a fresh snapshot of the active debts, so plans always reflect the
/// registry at the time of the call.
pub struct PayoffPlanner {
    registry: DebtRegistryBox,
    config: SimulationConfig,
}

impl PayoffPlanner {
    /// Creates a new `PayoffPlanner`.
    ///
    /// # Arguments
    ///
    /// * `registry` - The source of outstanding debts.
    /// * `config` - Start month, rounding policy and payoff horizon.
    pub fn new(registry: DebtRegistryBox, config: SimulationConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Adds or replaces a debt in the underlying registry.
    pub async fn add_debt(&self, debt: Debt) -> Result<()> {
        self.registry.store(debt).await
    }

    /// Simulates one strategy over the currently active debts.
    pub async fn plan(&self, strategy: Strategy, extra_payment: Money) -> Result<StrategyResult> {
        let debts = self.registry.active_debts().await?;
        if debts.is_empty() {
            tracing::info!("no active debts");
        }
        simulate(&debts, strategy, extra_payment, &self.config)
    }

    /// Simulates both strategies over the currently active debts.
    pub async fn compare(&self, extra_payment: Money) -> Result<StrategyComparison> {
        let debts = self.registry.active_debts().await?;
        compare_strategies(debts, extra_payment, self.config.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::AnnualRate;
    use crate::error::PayoffError;
    use crate::infrastructure::in_memory::InMemoryDebtRegistry;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn planner() -> PayoffPlanner {
        PayoffPlanner::new(
            Box::new(InMemoryDebtRegistry::new()),
            SimulationConfig::starting(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()),
        )
    }

    fn debt(id: &str, balance: Decimal, rate: Decimal) -> Debt {
        Debt::new(
            id,
            id,
            Money::new(balance),
            AnnualRate::new(rate),
            Money::new(dec!(50)),
        )
    }

    #[tokio::test]
    async fn test_plan_uses_registry_snapshot() {
        let planner = planner();
        planner.add_debt(debt("card", dec!(800), dec!(21))).await.unwrap();
        planner.add_debt(debt("closed", dec!(0), dec!(21))).await.unwrap();

        let result = planner.plan(Strategy::Avalanche, Money::ZERO).await.unwrap();
        assert_eq!(result.debt_plans.len(), 1);
        assert_eq!(result.debt_plans[0].id, "card");

        planner.add_debt(debt("loan", dec!(300), dec!(5))).await.unwrap();
        let result = planner.plan(Strategy::Avalanche, Money::ZERO).await.unwrap();
        assert_eq!(result.debt_plans.len(), 2);
    }

    #[tokio::test]
    async fn test_plan_without_debts() {
        let planner = planner();
        let result = planner
            .plan(Strategy::Snowball, Money::new(dec!(100)))
            .await
            .unwrap();
        assert_eq!(result.total_months, 0);
        assert_eq!(result.payoff_date, planner.config().start);
    }

    #[tokio::test]
    async fn test_plan_rejects_negative_balance() {
        let planner = planner();
        planner.add_debt(debt("card", dec!(800), dec!(21))).await.unwrap();
        planner.add_debt(debt("neg", dec!(-200), dec!(10))).await.unwrap();

        let result = planner.plan(Strategy::Avalanche, Money::ZERO).await;
        assert!(matches!(result, Err(PayoffError::InvalidInput(msg)) if msg.contains("neg")));

        let comparison = planner.compare(Money::new(dec!(50))).await;
        assert!(matches!(comparison, Err(PayoffError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_compare_through_planner() {
        let planner = planner();
        planner.add_debt(debt("card", dec!(2000), dec!(25))).await.unwrap();
        planner.add_debt(debt("loan", dec!(700), dec!(8))).await.unwrap();

        let comparison = planner.compare(Money::new(dec!(150))).await.unwrap();
        assert_eq!(comparison.avalanche.debt_plans.len(), 2);
        assert_eq!(comparison.snowball.debt_plans[0].id, "loan");
        assert!(comparison.avalanche.total_interest_paid <= comparison.snowball.total_interest_paid);
    }
}
