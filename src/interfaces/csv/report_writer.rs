use crate::application::comparison::StrategyComparison;
use crate::domain::money::{AnnualRate, Money};
use crate::domain::schedule::StrategyResult;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct PlanRow<'a> {
    id: &'a str,
    name: &'a str,
    remaining_amount: Money,
    interest_rate: AnnualRate,
    monthly_payment: Money,
    payoff_month: u32,
    payoff_date: String,
    total_interest: Money,
}

#[derive(Serialize)]
struct PaymentRow<'a> {
    id: &'a str,
    month: u32,
    date: String,
    payment: Money,
    principal: Money,
    interest: Money,
    remaining_balance: Money,
}

#[derive(Serialize)]
struct SummaryRow {
    strategy: &'static str,
    extra_payment: Money,
    total_months: u32,
    total_interest_paid: Money,
    total_paid: Money,
    payoff_date: String,
}

impl From<&StrategyResult> for SummaryRow {
    fn from(result: &StrategyResult) -> Self {
        Self {
            strategy: result.strategy.as_str(),
            extra_payment: result.extra_payment,
            total_months: result.total_months,
            total_interest_paid: result.total_interest_paid,
            total_paid: result.total_paid,
            payoff_date: month_label(result.payoff_date),
        }
    }
}

fn month_label(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Writes simulation results as CSV.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// One row per debt, in payoff order.
    pub fn write_plans(&mut self, result: &StrategyResult) -> Result<()> {
        for plan in &result.debt_plans {
            self.writer.serialize(PlanRow {
                id: &plan.id,
                name: &plan.name,
                remaining_amount: plan.remaining_amount,
                interest_rate: plan.interest_rate,
                monthly_payment: plan.monthly_payment,
                payoff_month: plan.payoff_month,
                payoff_date: month_label(plan.payoff_date),
                total_interest: plan.total_interest,
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Every payment record, grouped by debt in payoff order.
    /// `months` limits each debt to its first N payments.
    pub fn write_payments(&mut self, result: &StrategyResult, months: Option<usize>) -> Result<()> {
        for plan in &result.debt_plans {
            let payments = match months {
                Some(n) => plan.preview(n),
                None => plan.payments.as_slice(),
            };
            for record in payments {
                self.writer.serialize(PaymentRow {
                    id: &plan.id,
                    month: record.month,
                    date: month_label(record.date),
                    payment: record.payment,
                    principal: record.principal,
                    interest: record.interest,
                    remaining_balance: record.remaining_balance,
                })?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    /// One summary row per strategy.
    pub fn write_summaries<'a, I>(&mut self, results: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a StrategyResult>,
    {
        for result in results {
            self.writer.serialize(SummaryRow::from(result))?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_comparison(&mut self, comparison: &StrategyComparison) -> Result<()> {
        self.write_summaries([&comparison.avalanche, &comparison.snowball])
    }
}
