//! Spend authorizations between account pairs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Principal;

/// Two-level table of spend authorizations: owner, then spender.
///
/// Absent entries read as zero. Setting an allowance overwrites any
/// previous grant; zero-amount grants are stored as absent entries so
/// that tables with the same effective grants always compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceTable {
    grants: HashMap<Principal, HashMap<Principal, u64>>,
}

impl AllowanceTable {
    /// Amount `spender` may currently spend on behalf of `owner`.
    pub fn allowance(&self, owner: &Principal, spender: &Principal) -> u64 {
        self.grants
            .get(owner)
            .and_then(|grants| grants.get(spender))
            .copied()
            .unwrap_or(0)
    }

    /// Overwrite the grant from `owner` to `spender`.
    pub(crate) fn set(&mut self, owner: &Principal, spender: &Principal, amount: u64) {
        if amount == 0 {
            if let Some(grants) = self.grants.get_mut(owner) {
                grants.remove(spender);
                if grants.is_empty() {
                    self.grants.remove(owner);
                }
            }
        } else {
            self.grants
                .entry(owner.clone())
                .or_default()
                .insert(spender.clone(), amount);
        }
    }

    /// Reduce a grant by a spent amount. The caller has already checked
    /// that the grant covers it.
    pub(crate) fn consume(&mut self, owner: &Principal, spender: &Principal, amount: u64) {
        let remaining = self.allowance(owner, spender) - amount;
        self.set(owner, spender, remaining);
    }
}
