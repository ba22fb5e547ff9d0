use std::io;

use serde::{Serialize, Serializer};
use thiserror::Error;

use super::money::Money;

pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Insufficient funds in wallet (requested ${requested}, available ${available})")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Unable to write payment output")]
    Output(#[from] io::Error),
}

pub type PaymentResult<T> = anyhow::Result<T, PaymentError>;

/// What a store learned from a single payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The wallet was debited by the full amount.
    Completed { remaining: Money },

    /// The wallet could not cover the amount and was left untouched.
    Declined { remaining: Money },
}

impl PaymentOutcome {
    pub(crate) fn new(completed: bool, remaining: Money) -> Self {
        if completed {
            Self::Completed { remaining }
        } else {
            Self::Declined { remaining }
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Get the balance left after the attempt.
    pub fn remaining(&self) -> Money {
        match *self {
            Self::Completed { remaining } | Self::Declined { remaining } => remaining,
        }
    }
}

/// Read-only copy of a customer's state.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CustomerStatement {
    name: String,

    #[serde(serialize_with = "round_serialize")]
    balance: Money,
}

fn round_serialize<S>(amount: &Money, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    // Serialize to 2 decimal
    let rounded_amount = format!("{:.2}", amount.value().round_dp(2));
    s.serialize_str(rounded_amount.as_str())
}

impl CustomerStatement {
    pub(crate) fn new(name: &str, balance: Money) -> Self {
        Self {
            name: name.to_owned(),
            balance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }
}
