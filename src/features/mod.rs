mod money;
mod payment;
pub mod refactored;
pub mod violates;

pub use self::{
    money::{Money, MoneyError},
    payment::{
        CustomerStatement, PaymentError, PaymentOutcome, PaymentResult, DEFAULT_CUSTOMER_NAME,
    },
};
