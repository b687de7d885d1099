//! Burn fee engine for fee-bearing transfers

use serde::{Deserialize, Serialize};

use crate::types::{LedgerError, LedgerResult, MAX_BURN_FEE_PERCENT};

/// Breakdown of a transfer amount into the burned fee and the amount
/// actually delivered.
///
/// The sender is always debited `gross`; the recipient receives `net`
/// and `fee` is destroyed from the total supply rather than redirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Amount debited from the sender
    pub gross: u64,
    /// Fee destroyed from the total supply
    pub fee: u64,
    /// Amount credited to the recipient
    pub net: u64,
}

impl FeeSplit {
    /// Split a gross amount at the given fee percent.
    ///
    /// The fee is `floor(gross * percent / 100)`; division truncates
    /// toward zero, so small transfers at low percentages burn nothing.
    pub fn compute(gross: u64, percent: u8) -> Self {
        let fee = (u128::from(gross) * u128::from(percent) / 100) as u64;
        Self {
            gross,
            fee,
            net: gross - fee,
        }
    }
}

/// Validate a burn fee percent against the allowed range.
pub fn validate_fee_percent(percent: u8) -> LedgerResult<()> {
    if percent > MAX_BURN_FEE_PERCENT {
        Err(LedgerError::InvalidAmount)
    } else {
        Ok(())
    }
}
