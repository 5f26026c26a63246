use crate::config::SimulationConfig;
use crate::domain::money::Money;
use crate::domain::schedule::{DebtPaymentPlan, StrategyResult};
use crate::domain::strategy::Strategy;
use crate::error::{PayoffError, Result};

/// Rolls per-debt plans up into a single result.
///
/// `plans` must arrive in priority order. They are reordered by payoff month;
/// the sort is stable, so debts paid off in the same month keep their priority order.
pub fn aggregate(
    strategy: Strategy,
    extra_payment: Money,
    mut plans: Vec<DebtPaymentPlan>,
    config: &SimulationConfig,
) -> Result<StrategyResult> {
    plans.sort_by_key(|plan| plan.payoff_month);

    let total_months = plans
        .iter()
        .filter_map(|plan| plan.payments.last())
        .map(|record| record.month)
        .max()
        .unwrap_or(0);
    let total_interest_paid = Money::checked_sum(plans.iter().map(|plan| plan.total_interest))
        .ok_or_else(|| out_of_range("total interest"))?;
    let total_paid = plans
        .iter()
        .map(DebtPaymentPlan::total_paid)
        .try_fold(Money::ZERO, |total, paid| total.checked_add(paid?))
        .ok_or_else(|| out_of_range("total paid"))?;
    let payoff_date = if total_months == 0 {
        config.start
    } else {
        config.month_date(total_months)?
    };

    Ok(StrategyResult {
        strategy,
        extra_payment,
        total_months,
        total_interest_paid,
        total_paid,
        payoff_date,
        debt_plans: plans,
    })
}

fn out_of_range(total: &str) -> PayoffError {
    PayoffError::InvalidInput(format!("{total} exceeds the supported decimal range"))
}
