use super::wallet::Wallet;
use crate::features::{CustomerStatement, Money, DEFAULT_CUSTOMER_NAME};

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

    /// Get the customer's wallet.
    ///
    /// This exposes the wallet itself: whoever holds the returned reference
    /// can move the customer's money without the customer being involved.
    pub fn get_wallet(&mut self) -> &mut Wallet {
        &mut self.wallet
    }

    pub fn statement(&self) -> CustomerStatement {
        CustomerStatement::new(&self.name, self.wallet.get_money())
    }
}
