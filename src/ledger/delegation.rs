//! Single-level vote delegation bookkeeping

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Principal;

/// Registry of delegation pointers, one active delegatee per delegator.
///
/// A delegation transfers voting authority only; it never moves or
/// locks tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelegationRegistry {
    delegatees: HashMap<Principal, Principal>,
}

impl DelegationRegistry {
    /// Current delegatee of a delegator, if any.
    pub fn delegatee_of(&self, delegator: &Principal) -> Option<&Principal> {
        self.delegatees.get(delegator)
    }

    /// Whether the delegator has an active delegation.
    pub fn has_delegation(&self, delegator: &Principal) -> bool {
        self.delegatees.contains_key(delegator)
    }

    pub(crate) fn record(&mut self, delegator: &Principal, delegatee: &Principal) {
        self.delegatees
            .insert(delegator.clone(), delegatee.clone());
    }

    pub(crate) fn clear(&mut self, delegator: &Principal) {
        self.delegatees.remove(delegator);
    }
}
