//! Store talks only to Customer; Customer keeps its Wallet to itself.
//!
//! `Wallet` is private to this module tree, so neither `Store` nor any
//! caller outside it can name the type, let alone hold a reference to one.
//! The only way to move money is [`Customer::make_payment`].
//!
//! The wallet type is out of reach:
//!
//! ```compile_fail
//! use demeter_payments::refactored::Wallet;
//! ```
//!
//! and so is a customer's wallet:
//!
//! ```compile_fail
//! use demeter_payments::refactored::Customer;
//! use demeter_payments::Money;
//!
//! let mut customer = Customer::new(Money::from(100));
//! let _wallet = customer.get_wallet();
//! ```
//!
//! ```compile_fail
//! use demeter_payments::refactored::Customer;
//! use demeter_payments::Money;
//!
//! let customer = Customer::new(Money::from(100));
//! let _wallet = &customer.wallet;
//! ```

mod customer;
mod store;
mod wallet;

pub use self::{customer::Customer, store::Store};
