//! Per-account balance, stake, and lifetime-mint bookkeeping

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Principal;

/// Book of per-account token buckets.
///
/// Spendable balances and staked amounts are separate buckets; both
/// count toward the total supply. `minted` tracks the cumulative
/// lifetime amount minted to each account and never decreases. Absent
/// keys read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountBook {
    balances: HashMap<Principal, u64>,
    staked: HashMap<Principal, u64>,
    minted: HashMap<Principal, u64>,
}

impl AccountBook {
    /// Spendable balance of an account.
    pub fn balance_of(&self, account: &Principal) -> u64 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Staked amount of an account.
    pub fn staked_of(&self, account: &Principal) -> u64 {
        self.staked.get(account).copied().unwrap_or(0)
    }

    /// Cumulative lifetime amount minted to an account.
    pub fn minted_of(&self, account: &Principal) -> u64 {
        self.minted.get(account).copied().unwrap_or(0)
    }

    /// Sum of all spendable balances.
    pub fn circulating(&self) -> u64 {
        self.balances.values().sum()
    }

    /// Sum of all staked amounts.
    pub fn staked_total(&self) -> u64 {
        self.staked.values().sum()
    }

    /// Iterate over per-account lifetime mint totals.
    pub fn minted_entries(&self) -> impl Iterator<Item = (&Principal, &u64)> {
        self.minted.iter()
    }

    pub(crate) fn credit(&mut self, account: &Principal, amount: u64) {
        let balance = self.balance_of(account);
        self.balances.insert(account.clone(), balance + amount);
    }

    /// Debit a spendable balance. The caller has already checked funds.
    pub(crate) fn debit(&mut self, account: &Principal, amount: u64) {
        let balance = self.balance_of(account);
        self.balances.insert(account.clone(), balance - amount);
    }

    /// Record `new_total` as the lifetime minted amount for an account.
    pub(crate) fn record_minted(&mut self, account: &Principal, new_total: u64) {
        self.minted.insert(account.clone(), new_total);
    }

    /// Move a checked amount from the spendable bucket into the stake
    /// bucket.
    pub(crate) fn move_to_stake(&mut self, account: &Principal, amount: u64) {
        self.debit(account, amount);
        let staked = self.staked_of(account);
        self.staked.insert(account.clone(), staked + amount);
    }

    /// Move a checked amount from the stake bucket back to the
    /// spendable one.
    pub(crate) fn move_from_stake(&mut self, account: &Principal, amount: u64) {
        let staked = self.staked_of(account);
        self.staked.insert(account.clone(), staked - amount);
        self.credit(account, amount);
    }
}
