use std::io::Write;

use super::wallet::Wallet;
use crate::features::{CustomerStatement, Money, PaymentError, PaymentResult, DEFAULT_CUSTOMER_NAME};

/// A customer that handles its own payments.
///
/// There is no accessor for the wallet. Callers say *what* they want
/// (`make_payment`, `check_balance`) and the customer decides *how*.
#[derive(Debug)]
pub struct Customer {
    name: String,
    wallet: Wallet,
}

impl Customer {
    pub fn new(money: Money) -> Self {
        Self::with_name(DEFAULT_CUSTOMER_NAME, money)
    }

    pub fn with_name(name: impl Into<String>, money: Money) -> Self {
        Self {
            name: name.into(),
            wallet: Wallet::new(money),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pays `amount` out of the customer's wallet, writing progress to `out`.
    ///
    /// Returns the balance left on success. When the wallet cannot cover the
    /// amount nothing is debited and `PaymentError::InsufficientFunds` is
    /// returned.
    pub fn make_payment<W: Write>(&mut self, amount: Money, out: &mut W) -> PaymentResult<Money> {
        writeln!(out, "{} is making a payment of ${amount}", self.name)?;

        if self.wallet.has_sufficient_funds(amount) {
            return self.wallet.debit(amount);
        }

        writeln!(out, "{} has insufficient funds.", self.name)?;
        Err(PaymentError::InsufficientFunds {
            requested: amount,
            available: self.wallet.get_money(),
        })
    }

    pub fn check_balance(&self) -> Money {
        self.wallet.get_money()
    }

    pub fn statement(&self) -> CustomerStatement {
        CustomerStatement::new(&self.name, self.check_balance())
    }
}
