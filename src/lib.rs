pub mod books;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod fees;
pub mod patrons;
pub mod payments;
pub mod utils;
