//! Ledger module containing the token state machine and its sub-books

pub mod accounts;
pub mod allowances;
pub mod core;
pub mod delegation;

pub use accounts::*;
pub use allowances::*;
pub use delegation::*;
pub use self::core::*;
