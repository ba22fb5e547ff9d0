use crate::features::{Money, PaymentError, PaymentResult};

#[derive(Debug)]
pub struct Wallet {
    money: Money,
}

impl Wallet {
    pub fn new(initial_money: Money) -> Self {
        Self {
            money: initial_money,
        }
    }

    pub fn get_money(&self) -> Money {
        self.money
    }

    /// Takes `amount` out of the wallet and returns what is left.
    ///
    /// The funds check lives here rather than with the owner, so the wallet
    /// itself complains about an uncovered debit.
    pub fn debit(&mut self, amount: Money) -> PaymentResult<Money> {
        match self.money.checked_sub(amount) {
            Some(remaining) => {
                self.money = remaining;
                Ok(remaining)
            }
            None => {
                let err = PaymentError::InsufficientFunds {
                    requested: amount,
                    available: self.money,
                };
                warn!("{err}");
                Err(err)
            }
        }
    }
}
