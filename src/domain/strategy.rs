use super::debt::Debt;
use crate::error::PayoffError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Policy deciding which debt receives the cascading payment.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first.
    Avalanche,
    /// Smallest balance first.
    Snowball,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Avalanche, Strategy::Snowball];

    /// Total priority order between two debts. `Less` means `a` is paid first.
    ///
    /// Avalanche: descending rate, then descending balance.
    /// Snowball: ascending balance, then descending rate.
    /// Both fall back to the debt id so the order never depends on input order.
    pub fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        let by_policy = match self {
            Strategy::Avalanche => b
                .interest_rate
                .cmp(&a.interest_rate)
                .then_with(|| b.remaining_amount.cmp(&a.remaining_amount)),
            Strategy::Snowball => a
                .remaining_amount
                .cmp(&b.remaining_amount)
                .then_with(|| b.interest_rate.cmp(&a.interest_rate)),
        };
        by_policy.then_with(|| a.id.cmp(&b.id))
    }

    /// Returns the debts sorted into this strategy's fixed priority list.
    pub fn prioritize<I>(&self, debts: I) -> Vec<Debt>
    where
        I: IntoIterator<Item = Debt>,
    {
        let mut ordered: Vec<Debt> = debts.into_iter().collect();
        ordered.sort_by(|a, b| self.compare(a, b));
        ordered
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            other => Err(PayoffError::InvalidInput(format!(
                "unknown strategy '{other}', expected 'avalanche' or 'snowball'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::{AnnualRate, Money};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn debt(id: &str, balance: Decimal, rate: Decimal) -> Debt {
        Debt::new(
            id,
            id.to_uppercase(),
            Money::new(balance),
            AnnualRate::new(rate),
            Money::new(dec!(25)),
        )
    }

    fn ids(debts: &[Debt]) -> Vec<&str> {
        debts.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_avalanche_orders_by_rate_descending() {
        let debts = vec![
            debt("car", dec!(8000), dec!(6.5)),
            debt("card", dec!(2500), dec!(24.99)),
            debt("loan", dec!(500), dec!(11)),
        ];
        let ordered = Strategy::Avalanche.prioritize(debts);
        assert_eq!(ids(&ordered), vec!["card", "loan", "car"]);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let debts = vec![
            debt("car", dec!(8000), dec!(6.5)),
            debt("card", dec!(2500), dec!(24.99)),
            debt("loan", dec!(500), dec!(11)),
        ];
        let ordered = Strategy::Snowball.prioritize(debts);
        assert_eq!(ids(&ordered), vec!["loan", "card", "car"]);
    }

    #[test]
    fn test_avalanche_tie_breaks() {
        let debts = vec![
            debt("b", dec!(100), dec!(10)),
            debt("c", dec!(900), dec!(10)),
            debt("a", dec!(100), dec!(10)),
        ];
        let ordered = Strategy::Avalanche.prioritize(debts);
        assert_eq!(ids(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_snowball_tie_breaks() {
        let debts = vec![
            debt("b", dec!(100), dec!(5)),
            debt("c", dec!(100), dec!(12)),
            debt("a", dec!(100), dec!(5)),
        ];
        let ordered = Strategy::Snowball.prioritize(debts);
        assert_eq!(ids(&ordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let forward = vec![
            debt("a", dec!(300), dec!(9)),
            debt("b", dec!(300), dec!(9)),
            debt("c", dec!(100), dec!(18)),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        for strategy in Strategy::ALL {
            assert_eq!(
                strategy.prioritize(forward.clone()),
                strategy.prioritize(backward.clone())
            );
        }
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("avalanche".parse::<Strategy>().unwrap(), Strategy::Avalanche);
        assert_eq!(" Snowball ".parse::<Strategy>().unwrap(), Strategy::Snowball);
        assert!(matches!(
            "minimum".parse::<Strategy>(),
            Err(PayoffError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_strategy_serialization() {
        assert_eq!(
            serde_json::to_string(&Strategy::Avalanche).unwrap(),
            "\"avalanche\""
        );
        assert_eq!(Strategy::Snowball.to_string(), "snowball");
    }
}
