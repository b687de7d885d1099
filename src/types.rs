//! Core types, constants, and errors for the token ledger

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of tokens that can ever exist.
pub const MAX_SUPPLY: u64 = 500_000_000;

/// Lifetime cap on tokens minted to any single account.
pub const MINT_CAP_PER_USER: u64 = 1_000_000;

/// Burn fee percent a fresh ledger starts with.
pub const DEFAULT_BURN_FEE_PERCENT: u8 = 1;

/// Highest burn fee percent the admin may configure.
pub const MAX_BURN_FEE_PERCENT: u8 = 5;

/// Identifier of the zero/burn account.
///
/// Tokens cannot be minted or transferred to this principal, and it can
/// never be an approval spender or a delegatee.
pub const ZERO_ACCOUNT: &str = "SP000000000000000000002Q6VF78";

/// Opaque account identifier.
///
/// Principals are compared only for equality; no address structure is
/// interpreted beyond recognizing the distinguished zero account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from an identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The distinguished zero/burn principal.
    pub fn zero() -> Self {
        Self(ZERO_ACCOUNT.to_string())
    }

    /// Whether this is the zero/burn principal.
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_ACCOUNT
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bootstrap configuration for a token ledger.
///
/// The admin is fixed here for the life of the ledger; there is no
/// ownership-transfer operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Account allowed to mint, pause, and change the burn fee
    pub admin: Principal,
    /// Initial burn fee percent, in `[0, MAX_BURN_FEE_PERCENT]`
    pub burn_fee_percent: u8,
}

impl LedgerConfig {
    /// Configuration with the default burn fee.
    pub fn new(admin: Principal) -> Self {
        Self {
            admin,
            burn_fee_percent: DEFAULT_BURN_FEE_PERCENT,
        }
    }

    /// Override the initial burn fee percent.
    pub fn with_burn_fee_percent(mut self, percent: u8) -> Self {
        self.burn_fee_percent = percent;
        self
    }
}

/// Errors that can occur in the ledger system.
///
/// Every business-rule violation is reported as a returned error, never
/// a panic, so hosts can branch on the outcome. Each variant carries a
/// stable numeric code via [`LedgerError::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("caller is not the ledger admin")]
    NotAdmin,
    #[error("insufficient spendable balance")]
    InsufficientBalance,
    #[error("insufficient staked balance")]
    InsufficientStake,
    #[error("mint would exceed the maximum supply")]
    SupplyCapExceeded,
    #[error("ledger is paused")]
    Paused,
    #[error("the zero account cannot be a target")]
    ZeroAccount,
    #[error("amount is zero or out of range")]
    InvalidAmount,
    #[error("delegator already has an active delegation")]
    AlreadyDelegated,
    #[error("no active delegation to revoke")]
    NoDelegation,
    #[error("insufficient allowance")]
    InsufficientAllowance,
    #[error("mint would exceed the per-account mint cap")]
    MintCapExceeded,
}

impl LedgerError {
    /// Stable numeric code for hosts that branch on error discriminants.
    pub const fn code(&self) -> u16 {
        match self {
            LedgerError::NotAdmin => 100,
            LedgerError::InsufficientBalance => 101,
            LedgerError::InsufficientStake => 102,
            LedgerError::SupplyCapExceeded => 103,
            LedgerError::Paused => 104,
            LedgerError::ZeroAccount => 105,
            LedgerError::InvalidAmount => 106,
            LedgerError::AlreadyDelegated => 107,
            LedgerError::NoDelegation => 108,
            LedgerError::InsufficientAllowance => 109,
            LedgerError::MintCapExceeded => 110,
        }
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
