use crate::domain::debt::Debt;
use crate::error::{PayoffError, Result};
use std::io::Read;

/// Reads debts from a CSV source.
///
/// Expects the header `id,name,remaining_amount,interest_rate,minimum_payment`.
/// Whitespace around fields is trimmed.
pub struct DebtReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> DebtReader<R> {
    /// Wraps a debt export. The header row is required.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one debt per data row. A malformed row becomes an `Err` and does
    /// not end the stream.
    pub fn debts(self) -> impl Iterator<Item = Result<Debt>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PayoffError::from))
    }
}
