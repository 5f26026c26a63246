use crate::domain::debt::Debt;
use crate::domain::money::Money;
use crate::domain::schedule::{DebtPaymentPlan, PaymentRecord};
use crate::error::{PayoffError, Result};

/// Accumulates payment records per debt as the simulator advances.
///
/// Debts are addressed by their slot in the priority list. Each schedule must
/// stay chronological with a strictly shrinking balance, and nothing may be
/// recorded after the record that brings the balance to zero.
#[derive(Debug, Default)]
pub struct ScheduleRecorder {
    schedules: Vec<Vec<PaymentRecord>>,
}

impl ScheduleRecorder {
    pub fn new(debts: usize) -> Self {
        Self {
            schedules: vec![Vec::new(); debts],
        }
    }

    pub fn record(&mut self, slot: usize, record: PaymentRecord) -> Result<()> {
        let schedule = self
            .schedules
            .get_mut(slot)
            .ok_or_else(|| PayoffError::Schedule(format!("no debt in slot {slot}")))?;

        if record.remaining_balance.is_negative() {
            return Err(PayoffError::Schedule(format!(
                "negative balance {} in month {}",
                record.remaining_balance, record.month
            )));
        }

        if let Some(last) = schedule.last() {
            if last.pays_off() {
                return Err(PayoffError::Schedule(format!(
                    "debt in slot {slot} was paid off in month {}",
                    last.month
                )));
            }
            if record.month <= last.month {
                return Err(PayoffError::Schedule(format!(
                    "month {} recorded after month {}",
                    record.month, last.month
                )));
            }
            if record.remaining_balance >= last.remaining_balance {
                return Err(PayoffError::Schedule(format!(
                    "balance did not decrease in month {}",
                    record.month
                )));
            }
        }

        schedule.push(record);
        Ok(())
    }

    pub fn schedule(&self, slot: usize) -> &[PaymentRecord] {
        self.schedules.get(slot).map(Vec::as_slice).unwrap_or_default()
    }

    /// Builds one plan per debt. `debts` must be in the same slot order used for recording.
    pub fn into_plans(self, debts: &[Debt]) -> Result<Vec<DebtPaymentPlan>> {
        if debts.len() != self.schedules.len() {
            return Err(PayoffError::Schedule(format!(
                "{} schedules recorded for {} debts",
                self.schedules.len(),
                debts.len()
            )));
        }

        debts
            .iter()
            .zip(self.schedules)
            .map(|(debt, payments)| {
                let Some(last) = payments.last().filter(|r| r.pays_off()) else {
                    return Err(PayoffError::Schedule(format!(
                        "debt '{}' has no payoff record",
                        debt.id
                    )));
                };
                let (payoff_month, payoff_date) = (last.month, last.date);
                let total_interest = Money::checked_sum(payments.iter().map(|p| p.interest))
                    .ok_or_else(|| {
                        PayoffError::InvalidInput(format!(
                            "total interest of debt '{}' is out of range",
                            debt.id
                        ))
                    })?;

                Ok(DebtPaymentPlan {
                    id: debt.id.clone(),
                    name: debt.name.clone(),
                    remaining_amount: debt.remaining_amount,
                    interest_rate: debt.interest_rate,
                    monthly_payment: debt.minimum_payment,
                    payoff_month,
                    payoff_date,
                    total_interest,
                    payments,
                })
            })
            .collect()
    }
}
