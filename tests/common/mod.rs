#![allow(dead_code)]

use chrono::NaiveDate;
use debtpath::{
    AnnualRate, Debt, DebtPaymentPlan, Money, PaymentRecord, SimulationConfig, StrategyResult,
};
use rand::Rng;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn config() -> SimulationConfig {
    SimulationConfig::starting(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

pub fn debt(id: &str, balance: Decimal, rate: Decimal, minimum: Decimal) -> Debt {
    Debt::new(
        id,
        id.to_uppercase(),
        Money::new(balance),
        AnnualRate::new(rate),
        Money::new(minimum),
    )
}

/// Writes a CSV of random debts whose minimum payments always outpace interest.
pub fn generate_debts_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record(["id", "name", "remaining_amount", "interest_rate", "minimum_payment"])?;

    for i in 1..=rows {
        let balance_cents: i64 = rng.gen_range(10_000..2_000_000);
        let rate_bp: i64 = rng.gen_range(0..3_000);
        let balance = Decimal::new(balance_cents, 2);
        let rate = Decimal::new(rate_bp, 2);
        let interest = (balance * rate / Decimal::from(1200)).round_dp(2);
        let minimum = interest + Decimal::new(rng.gen_range(2_500..20_000), 2);

        wtr.write_record([
            format!("debt-{i}"),
            format!("Debt {i}"),
            balance.to_string(),
            rate.to_string(),
            minimum.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Checks the bookkeeping every simulation result must satisfy.
pub fn assert_schedule_invariants(result: &StrategyResult, extra: Money) {
    for plan in &result.debt_plans {
        let mut previous = plan.remaining_amount;
        for (index, record) in plan.payments.iter().enumerate() {
            assert_eq!(record.month, index as u32 + 1, "gap in schedule of {}", plan.id);
            assert_eq!(record.payment, record.principal + record.interest);
            assert!(!record.remaining_balance.is_negative());
            assert!(
                record.remaining_balance < previous,
                "balance of {} did not decrease in month {}",
                plan.id,
                record.month
            );
            previous = record.remaining_balance;
        }

        let last = plan.payments.last().expect("plan without payments");
        assert!(last.pays_off());
        assert_eq!(plan.payoff_month, last.month);
        assert_eq!(plan.payoff_date, last.date);
        assert_eq!(
            plan.total_interest,
            plan.payments.iter().map(|p| p.interest).sum::<Money>()
        );
    }

    for pair in result.debt_plans.windows(2) {
        assert!(pair[0].payoff_month <= pair[1].payoff_month);
    }

    let last_month = result
        .debt_plans
        .iter()
        .map(|p| p.payoff_month)
        .max()
        .unwrap_or(0);
    assert_eq!(result.total_months, last_month);
    assert_eq!(
        result.total_interest_paid,
        result.debt_plans.iter().map(|p| p.total_interest).sum::<Money>()
    );
    assert_eq!(
        result.total_paid,
        result
            .debt_plans
            .iter()
            .map(|p| p.total_paid().unwrap())
            .sum::<Money>()
    );

    // The monthly budget is either paid or left unused by a capped final payment.
    let priority = result.strategy.prioritize(result.debt_plans.iter().map(|plan| {
        Debt::new(
            plan.id.clone(),
            plan.name.clone(),
            plan.remaining_amount,
            plan.interest_rate,
            plan.monthly_payment,
        )
    }));
    for month in 1..=result.total_months {
        let active: Vec<(&DebtPaymentPlan, &PaymentRecord)> = priority
            .iter()
            .filter_map(|debt| {
                let plan = result.plan(&debt.id)?;
                plan.payment_in(month).map(|record| (plan, record))
            })
            .collect();

        let freed: Money = result
            .debt_plans
            .iter()
            .filter(|plan| plan.payoff_month < month)
            .map(|plan| plan.monthly_payment)
            .sum();
        let cascade = extra + freed;
        let minimums: Money = active.iter().map(|(plan, _)| plan.monthly_payment).sum();
        let budget = minimums + cascade;

        let mut unused = Money::ZERO;
        for (slot, (plan, record)) in active.iter().enumerate() {
            let scheduled = if slot == 0 {
                plan.monthly_payment + cascade
            } else {
                plan.monthly_payment
            };
            assert!(
                record.payment <= scheduled,
                "{} overpaid in month {month}",
                plan.id
            );
            if record.pays_off() {
                unused += scheduled - record.payment;
            } else {
                assert_eq!(record.payment, scheduled, "{} underpaid in month {month}", plan.id);
            }
        }

        let paid: Money = active.iter().map(|(_, record)| record.payment).sum();
        assert!(paid <= budget, "paid more than budgeted in month {month}");
        assert_eq!(paid + unused, budget, "money leaked in month {month}");
    }
}
