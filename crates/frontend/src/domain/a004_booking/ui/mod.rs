pub mod checkout;
pub mod history;
