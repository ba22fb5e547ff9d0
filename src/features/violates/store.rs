use std::io::Write;

use super::customer::Customer;
use crate::features::{Money, PaymentError, PaymentOutcome, PaymentResult};

#[derive(Debug, Default, Clone, Copy)]
pub struct Store;

impl Store {
    pub fn new() -> Self {
        Self
    }

    /// Debits the customer's wallet directly.
    ///
    /// The success line is written even when the wallet refused the debit;
    /// only the returned outcome tells the two apart.
    pub fn process_payment<W: Write>(
        &self,
        customer: &mut Customer,
        amount: Money,
        out: &mut W,
    ) -> PaymentResult<PaymentOutcome> {
        writeln!(out, "Store is processing payment...")?;

        let completed = match customer.get_wallet().debit(amount) {
            Ok(_) => true,
            Err(e @ PaymentError::InsufficientFunds { .. }) => {
                writeln!(out, "Error: {e}")?;
                false
            }
            Err(e) => return Err(e),
        };

        let remaining = customer.get_wallet().get_money();
        writeln!(
            out,
            "Payment successful. {} has ${remaining} left.",
            customer.name()
        )?;
        debug!("{} settled with ${remaining} remaining", customer.name());

        Ok(PaymentOutcome::new(completed, remaining))
    }
}
