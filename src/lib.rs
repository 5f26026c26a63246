//! Debt repayment strategy engine.
//!
//! Simulates month-by-month amortization of a set of debts under the
//! avalanche (highest rate first) or snowball (smallest balance first) policy,
//! cascading freed minimum payments and a fixed extra payment onto the
//! highest-priority debt still owing.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::simulator::simulate;
pub use config::SimulationConfig;
pub use domain::debt::Debt;
pub use domain::money::{AnnualRate, Money};
pub use domain::schedule::{DebtPaymentPlan, PaymentRecord, StrategyResult};
pub use domain::strategy::Strategy;
pub use error::{PayoffError, Result};
