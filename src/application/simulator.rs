use super::aggregator::aggregate;
use super::recorder::ScheduleRecorder;
use crate::config::SimulationConfig;
use crate::domain::debt::{Debt, validate_all};
use crate::domain::money::Money;
use crate::domain::schedule::{PaymentRecord, StrategyResult};
use crate::domain::strategy::Strategy;
use crate::error::{PayoffError, Result};
use rust_decimal::Decimal;

/// Simulates month-by-month repayment of `debts` under `strategy`.
///
/// Every active debt pays its minimum each month. The highest-priority debt
/// still owing also receives `extra_payment` plus the minimum payments freed by
/// debts paid off in earlier months. Payments are capped at what is owed, so a
/// balance never goes negative.
///
/// The function is pure: identical inputs yield identical results.
///
/// # Errors
///
/// * `InvalidInput` for negative amounts, rates or extra payment, or duplicate ids.
/// * `NonConvergentDebt` when a minimum payment cannot outpace its interest.
/// * `PayoffHorizonExceeded` when debts remain after `config.max_months`.
pub fn simulate(
    debts: &[Debt],
    strategy: Strategy,
    extra_payment: Money,
    config: &SimulationConfig,
) -> Result<StrategyResult> {
    config.validate()?;
    if extra_payment.is_negative() {
        return Err(PayoffError::InvalidInput(format!(
            "extra payment must not be negative, got {extra_payment}"
        )));
    }
    validate_all(debts)?;

    let active: Vec<Debt> = debts.iter().filter(|d| d.is_active()).cloned().collect();
    ensure_convergence(&active, config)?;

    let ordered = strategy.prioritize(active);
    let mut balances: Vec<Money> = ordered.iter().map(|d| d.remaining_amount).collect();
    let mut recorder = ScheduleRecorder::new(ordered.len());
    let mut freed = Money::ZERO;
    let mut month = 0;

    while balances.iter().any(Money::is_positive) {
        month += 1;
        if month > config.max_months {
            // Saturates: the sum of several huge balances may not fit.
            let remaining = Money::checked_sum(balances.iter().copied())
                .unwrap_or(Money::new(Decimal::MAX));
            tracing::warn!(%strategy, months = config.max_months, %remaining, "payoff horizon exceeded");
            return Err(PayoffError::PayoffHorizonExceeded {
                months: config.max_months,
                remaining: remaining.value(),
            });
        }

        let date = config.month_date(month)?;
        let target = balances.iter().position(Money::is_positive);
        let cascade = extra_payment.checked_add(freed).ok_or_else(|| {
            PayoffError::InvalidInput(
                "extra payment plus freed minimum payments is out of range".to_string(),
            )
        })?;
        let mut newly_freed = Money::ZERO;

        for (slot, debt) in ordered.iter().enumerate() {
            let balance = balances[slot];
            if !balance.is_positive() {
                continue;
            }

            let interest = debt
                .interest_rate
                .monthly_interest(balance, config)
                .ok_or_else(|| out_of_range(debt))?;
            let owed = balance
                .checked_add(interest)
                .ok_or_else(|| out_of_range(debt))?;
            let scheduled = if Some(slot) == target {
                debt.minimum_payment
                    .checked_add(cascade)
                    .ok_or_else(|| out_of_range(debt))?
            } else {
                debt.minimum_payment
            };
            let payment = scheduled.min(owed);
            let remaining_balance = owed - payment;

            recorder.record(
                slot,
                PaymentRecord {
                    month,
                    date,
                    payment,
                    principal: payment - interest,
                    interest,
                    remaining_balance,
                },
            )?;
            balances[slot] = remaining_balance;

            if remaining_balance.is_zero() {
                tracing::debug!(%strategy, debt = %debt.id, month, "debt paid off");
                newly_freed = newly_freed
                    .checked_add(debt.minimum_payment)
                    .ok_or_else(|| out_of_range(debt))?;
            }
        }

        // Freed minimums join the cascade from the following month on.
        freed = freed.checked_add(newly_freed).ok_or_else(|| {
            PayoffError::InvalidInput("freed minimum payments are out of range".to_string())
        })?;
    }

    let plans = recorder.into_plans(&ordered)?;
    let result = aggregate(strategy, extra_payment, plans, config)?;
    tracing::info!(
        %strategy,
        debts = result.debt_plans.len(),
        months = result.total_months,
        interest = %result.total_interest_paid,
        "simulation complete"
    );
    Ok(result)
}

fn out_of_range(debt: &Debt) -> PayoffError {
    PayoffError::InvalidInput(format!(
        "amounts for debt '{}' exceed the supported decimal range",
        debt.id
    ))
}

/// Fails when a debt's minimum payment does not exceed its first month of interest.
fn ensure_convergence(debts: &[Debt], config: &SimulationConfig) -> Result<()> {
    for debt in debts {
        let interest = debt
            .interest_rate
            .monthly_interest(debt.remaining_amount, config)
            .ok_or_else(|| out_of_range(debt))?;
        if debt.minimum_payment <= interest {
            tracing::warn!(debt = %debt.id, %interest, "minimum payment never reduces balance");
            return Err(PayoffError::NonConvergentDebt {
                id: debt.id.clone(),
                minimum_payment: debt.minimum_payment.value(),
                interest: interest.value(),
            });
        }
    }
    Ok(())
}
