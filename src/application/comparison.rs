use super::simulator::simulate;
use crate::config::SimulationConfig;
use crate::domain::debt::Debt;
use crate::domain::money::Money;
use crate::domain::schedule::StrategyResult;
use crate::domain::strategy::Strategy;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;

/// Avalanche and snowball results side by side for the same debts.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct StrategyComparison {
    pub avalanche: StrategyResult,
    pub snowball: StrategyResult,
}

impl StrategyComparison {
    pub fn result(&self, strategy: Strategy) -> &StrategyResult {
        match strategy {
            Strategy::Avalanche => &self.avalanche,
            Strategy::Snowball => &self.snowball,
        }
    }

    /// Interest avoided by choosing avalanche over snowball.
    pub fn interest_saved(&self) -> Money {
        self.snowball.total_interest_paid - self.avalanche.total_interest_paid
    }

    /// Months avoided by choosing avalanche over snowball. Negative when snowball finishes first.
    pub fn months_saved(&self) -> i64 {
        i64::from(self.snowball.total_months) - i64::from(self.avalanche.total_months)
    }

    /// Cheapest strategy in interest, then in months. Avalanche wins full ties.
    pub fn recommended(&self) -> Strategy {
        let avalanche = (self.avalanche.total_interest_paid, self.avalanche.total_months);
        let snowball = (self.snowball.total_interest_paid, self.snowball.total_months);
        if snowball < avalanche {
            Strategy::Snowball
        } else {
            Strategy::Avalanche
        }
    }
}

/// Runs both strategies concurrently on the blocking pool.
///
/// Each run gets its own accumulators; the shared debt snapshot is read-only.
pub async fn compare_strategies(
    debts: Vec<Debt>,
    extra_payment: Money,
    config: SimulationConfig,
) -> Result<StrategyComparison> {
    let debts: Arc<[Debt]> = debts.into();
    let config = Arc::new(config);

    let run = |strategy: Strategy| {
        let debts = Arc::clone(&debts);
        let config = Arc::clone(&config);
        tokio::task::spawn_blocking(move || simulate(&debts, strategy, extra_payment, &config))
    };
    let (avalanche, snowball) = tokio::try_join!(run(Strategy::Avalanche), run(Strategy::Snowball))?;

    Ok(StrategyComparison {
        avalanche: avalanche?,
        snowball: snowball?,
    })
}
