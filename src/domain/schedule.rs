use super::money::{AnnualRate, Money};
use super::strategy::Strategy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month's payment on one debt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct PaymentRecord {
    /// 1-based index of the simulated month.
    pub month: u32,
    /// Calendar month of the payment.
    pub date: NaiveDate,
    /// Total paid this month, always `principal + interest`.
    pub payment: Money,
    pub principal: Money,
    pub interest: Money,
    /// Balance left after this payment.
    pub remaining_balance: Money,
}

impl PaymentRecord {
    pub fn pays_off(&self) -> bool {
        self.remaining_balance.is_zero()
    }
}

/// The full repayment schedule of a single debt.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct DebtPaymentPlan {
    pub id: String,
    pub name: String,
    /// Balance at the start of the simulation.
    pub remaining_amount: Money,
    pub interest_rate: AnnualRate,
    /// Baseline minimum payment; cascaded extra payments show up in `payments` only.
    pub monthly_payment: Money,
    pub payoff_month: u32,
    pub payoff_date: NaiveDate,
    pub total_interest: Money,
    pub payments: Vec<PaymentRecord>,
}

impl DebtPaymentPlan {
    /// The first `months` payments, for drill-down tables.
    pub fn preview(&self, months: usize) -> &[PaymentRecord] {
        &self.payments[..months.min(self.payments.len())]
    }

    /// Sum of all payments; `None` if it overflows.
    pub fn total_paid(&self) -> Option<Money> {
        Money::checked_sum(self.payments.iter().map(|p| p.payment))
    }

    /// Payment made in the given simulated month, if the debt was still active.
    pub fn payment_in(&self, month: u32) -> Option<&PaymentRecord> {
        self.payments.iter().find(|p| p.month == month)
    }
}

/// Outcome of simulating one strategy over a set of debts.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct StrategyResult {
    pub strategy: Strategy,
    pub extra_payment: Money,
    /// Months until every debt is paid off.
    pub total_months: u32,
    pub total_interest_paid: Money,
    pub total_paid: Money,
    /// Month the last debt reaches zero; the start month when there was nothing to pay.
    pub payoff_date: NaiveDate,
    /// Plans in the order the debts were actually paid off.
    pub debt_plans: Vec<DebtPaymentPlan>,
}

impl StrategyResult {
    pub fn plan(&self, id: &str) -> Option<&DebtPaymentPlan> {
        self.debt_plans.iter().find(|plan| plan.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.debt_plans.is_empty()
    }
}
