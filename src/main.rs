use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use debtpath::application::planner::PayoffPlanner;
use debtpath::config::SimulationConfig;
use debtpath::domain::money::Money;
use debtpath::domain::strategy::Strategy;
use debtpath::infrastructure::in_memory::InMemoryDebtRegistry;
use debtpath::interfaces::csv::debt_reader::DebtReader;
use debtpath::interfaces::csv::report_writer::ReportWriter;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debts CSV file (id,name,remaining_amount,interest_rate,minimum_payment)
    input: PathBuf,

    /// Payoff strategy: avalanche or snowball
    #[arg(long, default_value = "avalanche", env = "DEBTPATH_STRATEGY")]
    strategy: Strategy,

    /// Extra amount paid every month on top of the minimum payments
    #[arg(long, default_value = "0", env = "DEBTPATH_EXTRA")]
    extra: Decimal,

    /// Month the simulation starts from (YYYY-MM). Defaults to the current month.
    #[arg(long, value_parser = parse_month)]
    start: Option<NaiveDate>,

    /// Round monthly interest to this unit (e.g. 0.01)
    #[arg(long, conflicts_with = "exact")]
    rounding_unit: Option<Decimal>,

    /// Keep interest unrounded
    #[arg(long)]
    exact: bool,

    /// Give up if debts are not paid off within this many months
    #[arg(long)]
    max_months: Option<u32>,

    /// JSON file with simulation settings. Flags take precedence.
    #[arg(long, env = "DEBTPATH_CONFIG")]
    config: Option<PathBuf>,

    /// Print every monthly payment instead of the per-debt summary
    #[arg(long, conflicts_with = "compare")]
    schedule: bool,

    /// With --schedule, only print the first N months of each debt
    #[arg(long, requires = "schedule")]
    months: Option<usize>,

    /// Run both strategies and print their totals side by side
    #[arg(long)]
    compare: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

fn parse_month(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM: {e}"))
}

fn build_config(cli: &Cli) -> Result<SimulationConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            SimulationConfig::from_reader(file).into_diagnostic()?
        }
        None => SimulationConfig::default(),
    };

    if let Some(start) = cli.start {
        config.start = start;
    }
    if cli.exact {
        config.rounding_unit = None;
    } else if let Some(unit) = cli.rounding_unit {
        config.rounding_unit = Some(unit);
    }
    if let Some(months) = cli.max_months {
        config.max_months = months;
    }

    config.validate().into_diagnostic()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let planner = PayoffPlanner::new(Box::new(InMemoryDebtRegistry::new()), config);

    // Load debts
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = DebtReader::new(file);
    let mut seen = HashSet::new();
    for debt_result in reader.debts() {
        match debt_result {
            Ok(debt) => {
                if !seen.insert(debt.id.clone()) {
                    tracing::warn!(debt = %debt.id, "Duplicate debt id, keeping the last row");
                }
                planner.add_debt(debt).await.into_diagnostic()?;
            }
            Err(e) => {
                tracing::warn!("Error reading debt: {}", e);
            }
        }
    }

    let extra = Money::new(cli.extra);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.compare {
        let comparison = planner.compare(extra).await.into_diagnostic()?;
        tracing::info!(
            recommended = %comparison.recommended(),
            interest_saved = %comparison.interest_saved(),
            months_saved = comparison.months_saved(),
            "strategies compared"
        );
        match cli.format {
            Format::Csv => ReportWriter::new(&mut out)
                .write_comparison(&comparison)
                .into_diagnostic()?,
            Format::Json => {
                serde_json::to_writer_pretty(&mut out, &comparison).into_diagnostic()?;
                writeln!(out).into_diagnostic()?;
            }
        }
        return Ok(());
    }

    let result = planner.plan(cli.strategy, extra).await.into_diagnostic()?;
    match cli.format {
        Format::Csv => {
            let mut writer = ReportWriter::new(&mut out);
            if cli.schedule {
                writer.write_payments(&result, cli.months).into_diagnostic()?;
            } else {
                writer.write_plans(&result).into_diagnostic()?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &result).into_diagnostic()?;
            writeln!(out).into_diagnostic()?;
        }
    }

    Ok(())
}
