use crate::features::{Money, PaymentError, PaymentResult};

/// Low-level balance holder. Owned by exactly one `Customer`.
#[derive(Debug)]
pub(super) struct Wallet {
    money: Money,
}

impl Wallet {
    pub(super) fn new(initial_money: Money) -> Self {
        Self {
            money: initial_money,
        }
    }

    pub(super) fn get_money(&self) -> Money {
        self.money
    }

    pub(super) fn has_sufficient_funds(&self, amount: Money) -> bool {
        self.money >= amount
    }

    /// Takes `amount` out of the wallet and returns what is left.
    ///
    /// An uncovered debit leaves the balance as it was.
    pub(super) fn debit(&mut self, amount: Money) -> PaymentResult<Money> {
        match self.money.checked_sub(amount) {
            Some(remaining) => {
                self.money = remaining;
                Ok(remaining)
            }
            None => Err(PaymentError::InsufficientFunds {
                requested: amount,
                available: self.money,
            }),
        }
    }
}
