//! Domain model: debts, monetary values, payoff strategies and the schedules
//! a simulation produces.

pub mod debt;
pub mod money;
pub mod ports;
pub mod schedule;
pub mod strategy;
