use std::io::Write;

use super::customer::Customer;
use crate::features::{Money, PaymentError, PaymentOutcome, PaymentResult};

/// Orchestrates a checkout. Knows customers, has never heard of wallets.
#[derive(Debug, Default, Clone, Copy)]
pub struct Store;

impl Store {
    pub fn new() -> Self {
        Self
    }

    pub fn process_payment<W: Write>(
        &self,
        customer: &mut Customer,
        amount: Money,
        out: &mut W,
    ) -> PaymentResult<PaymentOutcome> {
        writeln!(out, "Store is requesting payment from customer...")?;

        let completed = match customer.make_payment(amount, out) {
            Ok(_) => true,
            Err(PaymentError::InsufficientFunds {
                requested,
                available,
            }) => {
                warn!(
                    "Payment of ${requested} declined for {}, only ${available} available",
                    customer.name()
                );
                false
            }
            Err(e) => return Err(e),
        };

        let remaining = customer.check_balance();
        writeln!(
            out,
            "Payment processed. {} now has ${remaining} left.",
            customer.name()
        )?;
        debug!("{} settled with ${remaining} remaining", customer.name());

        Ok(PaymentOutcome::new(completed, remaining))
    }
}
