//! # Farm Token Core
//!
//! A fungible token ledger with administrative controls, a burn-fee
//! transfer mechanism, staking, and single-level vote delegation.
//!
//! ## Features
//!
//! - **Supply-capped minting**: a global maximum supply plus a lifetime
//!   per-account mint cap
//! - **Fee-bearing transfers**: a configurable percentage of every
//!   transfer is burned out of the supply
//! - **Allowances**: pre-authorized delegated spending with overwrite
//!   semantics
//! - **Staking**: separate spendable and staked buckets per account,
//!   moved without affecting supply
//! - **Vote delegation**: one revocable authority pointer per account
//! - **Event side-channel**: observers notified after each successful
//!   mutation, outside the deterministic core
//!
//! ## Quick Start
//!
//! ```rust
//! use farm_token_core::{LedgerConfig, Principal, TokenLedger};
//!
//! let admin = Principal::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
//! let mut ledger = TokenLedger::new(LedgerConfig::new(admin.clone())).unwrap();
//!
//! let grower = Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");
//! ledger.mint(&admin, &grower, 1_000).unwrap();
//! assert_eq!(ledger.get_balance(&grower), 1_000);
//! ```

pub mod fee;
pub mod ledger;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use fee::burn::*;
pub use ledger::*;
pub use traits::*;
pub use types::*;
