//! Validation utilities

use crate::types::{LedgerError, LedgerResult, Principal};

/// Validate that a token amount is positive.
///
/// Amounts are unsigned, so the only invalid amount is zero.
pub fn validate_amount(amount: u64) -> LedgerResult<()> {
    if amount == 0 {
        Err(LedgerError::InvalidAmount)
    } else {
        Ok(())
    }
}

/// Validate that a principal may be targeted by a credit, approval, or
/// delegation. The zero/burn account is never a valid target.
pub fn validate_target(account: &Principal) -> LedgerResult<()> {
    if account.is_zero() {
        Err(LedgerError::ZeroAccount)
    } else {
        Ok(())
    }
}
