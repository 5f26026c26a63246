//! Application layer: the payoff simulation pipeline and the services built on it.
//!
//! `simulator` orders debts and runs the monthly amortization loop, handing
//! each payment to the `recorder`; the `aggregator` rolls the finished
//! schedules into a `StrategyResult`. `comparison` and `planner` sit on top.

pub mod aggregator;
pub mod comparison;
pub mod planner;
pub mod recorder;
pub mod simulator;
