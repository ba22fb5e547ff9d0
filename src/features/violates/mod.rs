//! The "train wreck" checkout.
//!
//! `Customer::get_wallet` hands out a live `&mut Wallet`, and `Store` uses it
//! to debit and read the wallet itself: `customer.get_wallet().debit(..)`.
//! Any change to how customers hold money breaks the store.

mod customer;
mod store;
mod wallet;

pub use self::{customer::Customer, store::Store, wallet::Wallet};
