use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayoffError {
    #[error(
        "debt '{id}' will never be paid off: minimum payment {minimum_payment} does not exceed monthly interest {interest}"
    )]
    NonConvergentDebt {
        id: String,
        minimum_payment: Decimal,
        interest: Decimal,
    },
    #[error("debts are not paid off within {months} months ({remaining} still owed)")]
    PayoffHorizonExceeded { months: u32, remaining: Decimal },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Schedule error: {0}")]
    Schedule(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Simulation task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, PayoffError>;
