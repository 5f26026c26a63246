//! Simulation configuration.
//!
//! Everything that shapes a simulation run besides the debts themselves lives
//! here: the calendar month the run starts from, the interest rounding policy
//! and the payoff horizon. Values can be loaded from a JSON file and are
//! overridden by command line flags in the binary.

use crate::error::{PayoffError, Result};
use chrono::{Datelike, Local, Months, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Fifty years of monthly payments.
pub const DEFAULT_MAX_MONTHS: u32 = 600;

/// Interest is rounded to whole cents unless configured otherwise.
pub const DEFAULT_ROUNDING_UNIT: Decimal = dec!(0.01);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Month the simulation starts from. The first payment falls in the month after.
    #[serde(default = "current_month")]
    pub start: NaiveDate,

    /// Granularity interest accruals are rounded to. `None` keeps full decimal precision.
    #[serde(default = "default_rounding_unit")]
    pub rounding_unit: Option<Decimal>,

    /// Hard ceiling on simulated months.
    #[serde(default = "default_max_months")]
    pub max_months: u32,
}

fn current_month() -> NaiveDate {
    first_of_month(Local::now().date_naive())
}

fn default_rounding_unit() -> Option<Decimal> {
    Some(DEFAULT_ROUNDING_UNIT)
}

fn default_max_months() -> u32 {
    DEFAULT_MAX_MONTHS
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start: current_month(),
            rounding_unit: default_rounding_unit(),
            max_months: default_max_months(),
        }
    }
}

impl SimulationConfig {
    /// Creates a configuration starting at the month containing `start`.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: first_of_month(start),
            ..Self::default()
        }
    }

    /// Loads a configuration from JSON. Missing fields fall back to defaults.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut config: Self = serde_json::from_reader(source)?;
        config.start = first_of_month(config.start);
        config.validate()?;
        Ok(config)
    }

    pub fn with_rounding_unit(mut self, unit: Option<Decimal>) -> Self {
        self.rounding_unit = unit;
        self
    }

    pub fn with_max_months(mut self, months: u32) -> Self {
        self.max_months = months;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(unit) = self.rounding_unit
            && unit <= Decimal::ZERO
        {
            return Err(PayoffError::InvalidInput(format!(
                "rounding unit must be positive, got {unit}"
            )));
        }
        if self.max_months == 0 {
            return Err(PayoffError::InvalidInput(
                "payoff horizon must be at least one month".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies the rounding policy to a monetary value. `None` on overflow.
    pub fn round(&self, value: Decimal) -> Option<Decimal> {
        match self.rounding_unit {
            Some(unit) => value
                .checked_div(unit)?
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .checked_mul(unit),
            None => Some(value),
        }
    }

    /// Calendar month of the given 1-based simulation month.
    pub fn month_date(&self, month: u32) -> Result<NaiveDate> {
        self.start
            .checked_add_months(Months::new(month))
            .ok_or_else(|| {
                PayoffError::InvalidInput(format!(
                    "month {month} after {} is out of calendar range",
                    self.start
                ))
            })
    }
}
