use super::money::{AnnualRate, Money};
use crate::error::{PayoffError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An outstanding debt as supplied by the finance data store.
///
/// A simulation run treats debts as an immutable snapshot; the engine never
/// writes balances back.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Debt {
    /// Unique identifier, also the final tie-breaker when ordering debts.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Balance currently owed.
    pub remaining_amount: Money,
    /// Nominal annual percentage rate.
    pub interest_rate: AnnualRate,
    /// Minimum monthly payment owed on this debt.
    pub minimum_payment: Money,
}

impl Debt {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        remaining_amount: Money,
        interest_rate: AnnualRate,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            remaining_amount,
            interest_rate,
            minimum_payment,
        }
    }

    /// Debts with nothing left to pay are not simulated.
    pub fn is_active(&self) -> bool {
        self.remaining_amount.is_positive()
    }

    /// Rejects negative balances, rates and minimum payments.
    pub fn validate(&self) -> Result<()> {
        if self.remaining_amount.is_negative() {
            return Err(PayoffError::InvalidInput(format!(
                "debt '{}' has a negative remaining amount",
                self.id
            )));
        }
        if self.interest_rate.percent() < Decimal::ZERO {
            return Err(PayoffError::InvalidInput(format!(
                "debt '{}' has a negative interest rate",
                self.id
            )));
        }
        if self.minimum_payment.is_negative() {
            return Err(PayoffError::InvalidInput(format!(
                "debt '{}' has a negative minimum payment",
                self.id
            )));
        }
        Ok(())
    }
}

/// Validates every debt and checks that ids are unique.
pub fn validate_all(debts: &[Debt]) -> Result<()> {
    let mut seen = HashSet::with_capacity(debts.len());
    for debt in debts {
        debt.validate()?;
        if !seen.insert(debt.id.as_str()) {
            return Err(PayoffError::InvalidInput(format!(
                "debt id '{}' appears more than once",
                debt.id
            )));
        }
    }
    Ok(())
}
