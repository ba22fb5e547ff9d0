use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Invalid amount - {0} is negative")]
    Negative(Decimal),

    #[error("Invalid amount - {0} has more than two decimal places")]
    TooPrecise(Decimal),

    #[error("Invalid amount - {0}")]
    Parse(#[from] rust_decimal::Error),
}

type MoneyResult<T> = anyhow::Result<T, MoneyError>;

/// A non-negative amount of money.
///
/// Both wallet balances and payment amounts use this type, so a negative
/// payment can never reach a wallet. Values are whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> MoneyResult<Self> {
        if value < dec!(0) {
            return Err(MoneyError::Negative(value));
        }
        if value.normalize().scale() > 2 {
            return Err(MoneyError::TooPrecise(value));
        }
        Ok(Self(value))
    }

    /// Get the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Subtracts `rhs`, or returns `None` when the result would go below zero.
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        (self.0 >= rhs.0).then(|| Self(self.0 - rhs.0))
    }
}

impl TryFrom<Decimal> for Money {
    type Error = MoneyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<u32> for Money {
    fn from(value: u32) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim())?;
        Self::new(value)
    }
}

// Trailing zeros dropped: 75, 75.5, 0.01
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
