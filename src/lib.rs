//! Two renditions of the same store checkout.
//!
//! - [`violates`]: the store reaches through the customer into the wallet
//!   (`customer.get_wallet().debit(..)`), coupling itself to how customers
//!   keep their money.
//! - [`refactored`]: the store asks the customer to pay and the customer
//!   delegates to a wallet nobody else can name.
//!
//! ```
//! use demeter_payments::refactored::{Customer, Store};
//! use demeter_payments::Money;
//!
//! let mut customer = Customer::new(Money::from(100));
//! let mut out: Vec<u8> = Vec::new();
//! let outcome = Store::new()
//!     .process_payment(&mut customer, Money::from(25), &mut out)
//!     .unwrap();
//!
//! assert!(outcome.is_completed());
//! assert_eq!(customer.check_balance(), Money::from(75));
//! ```

#[macro_use]
extern crate log;

pub mod cli;
mod features;

pub use features::{
    refactored, violates, CustomerStatement, Money, MoneyError, PaymentError, PaymentOutcome,
    PaymentResult, DEFAULT_CUSTOMER_NAME,
};
