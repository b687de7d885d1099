//! Main ledger orchestrator that validates and applies token operations

use serde::{Deserialize, Serialize};

use crate::fee::burn::{validate_fee_percent, FeeSplit};
use crate::ledger::{AccountBook, AllowanceTable, DelegationRegistry};
use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{validate_amount, validate_target};

/// Full ledger state.
///
/// Everything the operations read and write lives here, so a clone
/// taken before a call can be compared against the state afterwards;
/// event sinks, ids, and timestamps are deliberately kept out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerState {
    admin: Principal,
    paused: bool,
    total_supply: u64,
    burn_fee_percent: u8,
    accounts: AccountBook,
    allowances: AllowanceTable,
    delegations: DelegationRegistry,
}

/// Totals across the supply buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyReport {
    /// Tokens in existence
    pub total_supply: u64,
    /// Sum of all spendable balances
    pub circulating: u64,
    /// Sum of all staked amounts
    pub staked_total: u64,
}

/// Report on ledger integrity and validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerIntegrityReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
    pub total_supply: u64,
    pub circulating: u64,
    pub staked_total: u64,
}

/// The token ledger state machine.
///
/// Operations are synchronous and atomic: every check runs before any
/// field is written, so a rejected call leaves the state untouched. A
/// concurrent host must serialize mutating calls behind a single lock
/// or actor; nothing in here blocks or performs I/O.
pub struct TokenLedger {
    state: LedgerState,
    sinks: Vec<Box<dyn EventSink>>,
}

impl std::fmt::Debug for TokenLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenLedger")
            .field("state", &self.state)
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl TokenLedger {
    /// Create a ledger from a bootstrap configuration.
    ///
    /// Rejects an out-of-range initial fee and a zero-account admin.
    pub fn new(config: LedgerConfig) -> LedgerResult<Self> {
        validate_fee_percent(config.burn_fee_percent)?;
        if config.admin.is_zero() {
            return Err(LedgerError::ZeroAccount);
        }
        Ok(Self {
            state: LedgerState {
                admin: config.admin,
                paused: false,
                total_supply: 0,
                burn_fee_percent: config.burn_fee_percent,
                accounts: AccountBook::default(),
                allowances: AllowanceTable::default(),
                delegations: DelegationRegistry::default(),
            },
            sinks: Vec::new(),
        })
    }

    /// Create a ledger with an event sink already registered.
    pub fn with_sink(config: LedgerConfig, sink: Box<dyn EventSink>) -> LedgerResult<Self> {
        let mut ledger = Self::new(config)?;
        ledger.add_sink(sink);
        Ok(ledger)
    }

    /// Register an observer notified after each successful mutation.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    fn emit(&self, event: LedgerEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let record = EventRecord::new(event);
        for sink in &self.sinks {
            sink.on_event(&record);
        }
    }

    fn ensure_admin(&self, caller: &Principal) -> LedgerResult<()> {
        if *caller != self.state.admin {
            return Err(LedgerError::NotAdmin);
        }
        Ok(())
    }

    fn ensure_not_paused(&self) -> LedgerResult<()> {
        if self.state.paused {
            return Err(LedgerError::Paused);
        }
        Ok(())
    }

    // Admin operations

    /// Pause or resume mutating operations. Admin only.
    ///
    /// Not gated by the pause flag itself, so a paused ledger can be
    /// resumed. Returns the new value.
    pub fn set_paused(&mut self, caller: &Principal, pause: bool) -> LedgerResult<bool> {
        self.ensure_admin(caller)?;
        self.state.paused = pause;
        self.emit(LedgerEvent::PausedChanged { paused: pause });
        Ok(pause)
    }

    /// Set the burn fee percent applied to transfers. Admin only.
    ///
    /// Returns the new fee.
    pub fn set_burn_fee_percent(&mut self, caller: &Principal, percent: u8) -> LedgerResult<u8> {
        self.ensure_admin(caller)?;
        validate_fee_percent(percent)?;
        self.state.burn_fee_percent = percent;
        self.emit(LedgerEvent::BurnFeeChanged { percent });
        Ok(percent)
    }

    /// Mint new tokens to a recipient. Admin only; not gated by the
    /// pause flag.
    ///
    /// The per-account lifetime cap is checked before the global supply
    /// cap, so a capped recipient reports the per-account error even
    /// when the supply cap would also be hit.
    pub fn mint(
        &mut self,
        caller: &Principal,
        recipient: &Principal,
        amount: u64,
    ) -> LedgerResult<()> {
        self.ensure_admin(caller)?;
        validate_amount(amount)?;
        validate_target(recipient)?;

        let new_minted = match self.state.accounts.minted_of(recipient).checked_add(amount) {
            Some(total) if total <= MINT_CAP_PER_USER => total,
            _ => return Err(LedgerError::MintCapExceeded),
        };
        let new_supply = match self.state.total_supply.checked_add(amount) {
            Some(total) if total <= MAX_SUPPLY => total,
            _ => return Err(LedgerError::SupplyCapExceeded),
        };

        self.state.accounts.record_minted(recipient, new_minted);
        self.state.accounts.credit(recipient, amount);
        self.state.total_supply = new_supply;
        self.emit(LedgerEvent::Minted {
            recipient: recipient.clone(),
            amount,
        });
        Ok(())
    }

    // Token movement

    /// Destroy tokens from the caller's spendable balance.
    ///
    /// The full amount leaves the supply; self-burns pay no fee.
    pub fn burn(&mut self, caller: &Principal, amount: u64) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        validate_amount(amount)?;
        if self.state.accounts.balance_of(caller) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        self.state.accounts.debit(caller, amount);
        self.state.total_supply -= amount;
        self.emit(LedgerEvent::Burned {
            account: caller.clone(),
            amount,
        });
        Ok(())
    }

    /// Transfer tokens, burning the configured fee out of the amount.
    ///
    /// The caller is debited the full amount; the recipient receives
    /// the amount net of the fee, and the fee is destroyed.
    pub fn transfer(
        &mut self,
        caller: &Principal,
        recipient: &Principal,
        amount: u64,
    ) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        validate_amount(amount)?;
        validate_target(recipient)?;
        if self.state.accounts.balance_of(caller) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        let split = FeeSplit::compute(amount, self.state.burn_fee_percent);
        self.state.accounts.debit(caller, amount);
        self.state.accounts.credit(recipient, split.net);
        self.state.total_supply -= split.fee;
        self.emit(LedgerEvent::Transferred {
            from: caller.clone(),
            to: recipient.clone(),
            spender: None,
            amount,
            fee: split.fee,
        });
        Ok(())
    }

    /// Authorize a spender to move the caller's funds.
    ///
    /// Overwrite semantics: the new amount replaces any previous grant,
    /// and zero revokes it. No positivity check applies.
    pub fn approve(
        &mut self,
        caller: &Principal,
        spender: &Principal,
        amount: u64,
    ) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        validate_target(spender)?;

        self.state.allowances.set(caller, spender, amount);
        self.emit(LedgerEvent::Approved {
            owner: caller.clone(),
            spender: spender.clone(),
            amount,
        });
        Ok(())
    }

    /// Spend from an owner's balance under a prior allowance.
    ///
    /// The allowance is checked before the owner's balance, and it is
    /// reduced by the full amount, fee included.
    pub fn transfer_from(
        &mut self,
        caller: &Principal,
        owner: &Principal,
        recipient: &Principal,
        amount: u64,
    ) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        validate_amount(amount)?;
        validate_target(recipient)?;
        if self.state.allowances.allowance(owner, caller) < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        if self.state.accounts.balance_of(owner) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        let split = FeeSplit::compute(amount, self.state.burn_fee_percent);
        self.state.allowances.consume(owner, caller, amount);
        self.state.accounts.debit(owner, amount);
        self.state.accounts.credit(recipient, split.net);
        self.state.total_supply -= split.fee;
        self.emit(LedgerEvent::Transferred {
            from: owner.clone(),
            to: recipient.clone(),
            spender: Some(caller.clone()),
            amount,
            fee: split.fee,
        });
        Ok(())
    }

    // Staking

    /// Move tokens from the spendable balance into the stake bucket.
    ///
    /// Supply is unchanged; staking is a reallocation, not a burn.
    pub fn stake(&mut self, caller: &Principal, amount: u64) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        validate_amount(amount)?;
        if self.state.accounts.balance_of(caller) < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        self.state.accounts.move_to_stake(caller, amount);
        self.emit(LedgerEvent::Staked {
            account: caller.clone(),
            amount,
        });
        Ok(())
    }

    /// Move staked tokens back to the spendable balance.
    pub fn unstake(&mut self, caller: &Principal, amount: u64) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        validate_amount(amount)?;
        if self.state.accounts.staked_of(caller) < amount {
            return Err(LedgerError::InsufficientStake);
        }

        self.state.accounts.move_from_stake(caller, amount);
        self.emit(LedgerEvent::Unstaked {
            account: caller.clone(),
            amount,
        });
        Ok(())
    }

    // Delegation

    /// Point the caller's voting authority at a delegatee.
    ///
    /// A delegation is a pure authority pointer: it moves no tokens,
    /// self-delegation is allowed, and a delegator can hold only one at
    /// a time.
    pub fn delegate(&mut self, caller: &Principal, delegatee: &Principal) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        validate_target(delegatee)?;
        if self.state.delegations.has_delegation(caller) {
            return Err(LedgerError::AlreadyDelegated);
        }

        self.state.delegations.record(caller, delegatee);
        self.emit(LedgerEvent::Delegated {
            delegator: caller.clone(),
            delegatee: delegatee.clone(),
        });
        Ok(())
    }

    /// Remove the caller's active delegation.
    pub fn revoke_delegation(&mut self, caller: &Principal) -> LedgerResult<()> {
        self.ensure_not_paused()?;
        if !self.state.delegations.has_delegation(caller) {
            return Err(LedgerError::NoDelegation);
        }

        self.state.delegations.clear(caller);
        self.emit(LedgerEvent::DelegationRevoked {
            delegator: caller.clone(),
        });
        Ok(())
    }

    // Queries

    /// Spendable balance of an account; unknown accounts hold zero.
    pub fn get_balance(&self, account: &Principal) -> u64 {
        self.state.accounts.balance_of(account)
    }

    /// Staked amount of an account; unknown accounts hold zero.
    pub fn get_staked(&self, account: &Principal) -> u64 {
        self.state.accounts.staked_of(account)
    }

    /// Cumulative lifetime amount minted to an account.
    pub fn get_minted(&self, account: &Principal) -> u64 {
        self.state.accounts.minted_of(account)
    }

    /// Amount `spender` may currently spend on behalf of `owner`.
    pub fn get_allowance(&self, owner: &Principal, spender: &Principal) -> u64 {
        self.state.allowances.allowance(owner, spender)
    }

    /// Current delegatee of a delegator, if any.
    pub fn get_delegatee(&self, delegator: &Principal) -> Option<Principal> {
        self.state.delegations.delegatee_of(delegator).cloned()
    }

    /// Whether the caller is the ledger admin.
    pub fn is_admin(&self, caller: &Principal) -> bool {
        *caller == self.state.admin
    }

    /// The ledger admin.
    pub fn admin(&self) -> &Principal {
        &self.state.admin
    }

    /// Whether mutating operations are currently paused.
    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Tokens currently in existence.
    pub fn total_supply(&self) -> u64 {
        self.state.total_supply
    }

    /// Burn fee percent currently applied to transfers.
    pub fn burn_fee_percent(&self) -> u8 {
        self.state.burn_fee_percent
    }

    /// Borrow the full ledger state, e.g. to snapshot or compare it.
    pub fn state(&self) -> &LedgerState {
        &self.state
    }

    // Reporting

    /// Totals across the ledger's supply buckets.
    pub fn supply_report(&self) -> SupplyReport {
        SupplyReport {
            total_supply: self.state.total_supply,
            circulating: self.state.accounts.circulating(),
            staked_total: self.state.accounts.staked_total(),
        }
    }

    /// Validate the integrity of the ledger
    pub fn validate_integrity(&self) -> LedgerIntegrityReport {
        let report = self.supply_report();
        let mut issues = Vec::new();

        if report.total_supply != report.circulating + report.staked_total {
            issues.push(format!(
                "total supply {} does not match circulating {} plus staked {}",
                report.total_supply, report.circulating, report.staked_total
            ));
        }

        if report.total_supply > MAX_SUPPLY {
            issues.push(format!(
                "total supply {} exceeds the maximum supply {}",
                report.total_supply, MAX_SUPPLY
            ));
        }

        for (account, minted) in self.state.accounts.minted_entries() {
            if *minted > MINT_CAP_PER_USER {
                issues.push(format!(
                    "account {} has {} lifetime minted tokens, above the cap of {}",
                    account, minted, MINT_CAP_PER_USER
                ));
            }
        }

        LedgerIntegrityReport {
            is_valid: issues.is_empty(),
            issues,
            total_supply: report.total_supply,
            circulating: report.circulating,
            staked_total: report.staked_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> Principal {
        Principal::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM")
    }

    fn alice() -> Principal {
        Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG")
    }

    fn bob() -> Principal {
        Principal::from("ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5N7R21XCP")
    }

    fn carol() -> Principal {
        Principal::from("ST4PQ4WDB12GQ7BRE5MVJ63KZ0T9C4YFJ9X2V1NEH")
    }

    fn ledger() -> TokenLedger {
        TokenLedger::new(LedgerConfig::new(admin())).unwrap()
    }

    #[test]
    fn test_mint_credits_recipient_and_supply() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();

        assert_eq!(ledger.get_balance(&alice()), 1_000);
        assert_eq!(ledger.get_minted(&alice()), 1_000);
        assert_eq!(ledger.total_supply(), 1_000);
    }

    #[test]
    fn test_mint_requires_admin() {
        let mut ledger = ledger();
        let result = ledger.mint(&alice(), &bob(), 1_000);
        assert_eq!(result, Err(LedgerError::NotAdmin));
    }

    #[test]
    fn test_mint_rejects_zero_amount_and_zero_recipient() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.mint(&admin(), &alice(), 0),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(
            ledger.mint(&admin(), &Principal::zero(), 1_000),
            Err(LedgerError::ZeroAccount)
        );
    }

    #[test]
    fn test_mint_enforces_per_account_cap() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 500_000).unwrap();

        let result = ledger.mint(&admin(), &alice(), 600_000);
        assert_eq!(result, Err(LedgerError::MintCapExceeded));
        assert_eq!(ledger.get_balance(&alice()), 500_000);
        assert_eq!(ledger.total_supply(), 500_000);
    }

    #[test]
    fn test_mint_checks_account_cap_before_supply_cap() {
        let mut ledger = ledger();
        // Violates both caps at once; the per-account error must win.
        let result = ledger.mint(&admin(), &alice(), 600_000_000);
        assert_eq!(result, Err(LedgerError::MintCapExceeded));
    }

    #[test]
    fn test_mint_enforces_supply_cap() {
        let mut ledger = ledger();
        for i in 0..500 {
            let account = Principal::from(format!("ST{:039}", i));
            ledger.mint(&admin(), &account, MINT_CAP_PER_USER).unwrap();
        }
        assert_eq!(ledger.total_supply(), MAX_SUPPLY);

        let result = ledger.mint(&admin(), &alice(), 1);
        assert_eq!(result, Err(LedgerError::SupplyCapExceeded));
        assert_eq!(ledger.total_supply(), MAX_SUPPLY);
    }

    #[test]
    fn test_mint_works_while_paused() {
        let mut ledger = ledger();
        ledger.set_paused(&admin(), true).unwrap();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        assert_eq!(ledger.get_balance(&alice()), 1_000);
    }

    #[test]
    fn test_burn_destroys_full_amount() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.burn(&alice(), 300).unwrap();

        assert_eq!(ledger.get_balance(&alice()), 700);
        assert_eq!(ledger.total_supply(), 700);
    }

    #[test]
    fn test_burn_requires_funds() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 100).unwrap();
        assert_eq!(
            ledger.burn(&alice(), 101),
            Err(LedgerError::InsufficientBalance)
        );
    }

    #[test]
    fn test_transfer_applies_burn_fee() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.transfer(&alice(), &bob(), 100).unwrap();

        assert_eq!(ledger.get_balance(&alice()), 900);
        assert_eq!(ledger.get_balance(&bob()), 99);
        assert_eq!(ledger.total_supply(), 999);
    }

    #[test]
    fn test_transfer_check_order() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 100).unwrap();

        // Zero recipient wins over the balance check.
        assert_eq!(
            ledger.transfer(&alice(), &Principal::zero(), 1_000),
            Err(LedgerError::ZeroAccount)
        );
        // Zero amount wins over the zero recipient.
        assert_eq!(
            ledger.transfer(&alice(), &Principal::zero(), 0),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(
            ledger.transfer(&alice(), &bob(), 101),
            Err(LedgerError::InsufficientBalance)
        );
    }

    #[test]
    fn test_transfer_to_self_loses_only_the_fee() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.transfer(&alice(), &alice(), 100).unwrap();

        assert_eq!(ledger.get_balance(&alice()), 999);
        assert_eq!(ledger.total_supply(), 999);
    }

    #[test]
    fn test_approve_and_transfer_from() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.approve(&alice(), &carol(), 200).unwrap();
        ledger.transfer_from(&carol(), &alice(), &bob(), 100).unwrap();

        assert_eq!(ledger.get_balance(&alice()), 900);
        assert_eq!(ledger.get_balance(&bob()), 99);
        // The allowance drops by the gross amount, fee included.
        assert_eq!(ledger.get_allowance(&alice(), &carol()), 100);
        assert_eq!(ledger.total_supply(), 999);
    }

    #[test]
    fn test_approve_overwrites_and_zero_revokes() {
        let mut ledger = ledger();
        ledger.approve(&alice(), &carol(), 200).unwrap();
        ledger.approve(&alice(), &carol(), 50).unwrap();
        assert_eq!(ledger.get_allowance(&alice(), &carol()), 50);

        ledger.approve(&alice(), &carol(), 0).unwrap();
        assert_eq!(ledger.get_allowance(&alice(), &carol()), 0);
    }

    #[test]
    fn test_approve_rejects_zero_spender() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.approve(&alice(), &Principal::zero(), 100),
            Err(LedgerError::ZeroAccount)
        );
    }

    #[test]
    fn test_transfer_from_checks_allowance_before_balance() {
        let mut ledger = ledger();
        // Alice has no balance and Carol holds a small allowance; the
        // allowance error must fire first.
        ledger.approve(&alice(), &carol(), 50).unwrap();
        assert_eq!(
            ledger.transfer_from(&carol(), &alice(), &bob(), 100),
            Err(LedgerError::InsufficientAllowance)
        );

        // With enough allowance the balance check takes over.
        ledger.approve(&alice(), &carol(), 500).unwrap();
        assert_eq!(
            ledger.transfer_from(&carol(), &alice(), &bob(), 100),
            Err(LedgerError::InsufficientBalance)
        );
    }

    #[test]
    fn test_stake_moves_between_buckets() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.stake(&alice(), 500).unwrap();

        assert_eq!(ledger.get_balance(&alice()), 500);
        assert_eq!(ledger.get_staked(&alice()), 500);
        assert_eq!(ledger.total_supply(), 1_000);
    }

    #[test]
    fn test_unstake_returns_funds() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.stake(&alice(), 500).unwrap();
        ledger.unstake(&alice(), 200).unwrap();

        assert_eq!(ledger.get_balance(&alice()), 700);
        assert_eq!(ledger.get_staked(&alice()), 300);
    }

    #[test]
    fn test_unstake_requires_staked_funds() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.stake(&alice(), 100).unwrap();
        assert_eq!(
            ledger.unstake(&alice(), 101),
            Err(LedgerError::InsufficientStake)
        );
    }

    #[test]
    fn test_staked_tokens_are_not_spendable() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.stake(&alice(), 1_000).unwrap();
        assert_eq!(
            ledger.transfer(&alice(), &bob(), 1),
            Err(LedgerError::InsufficientBalance)
        );
    }

    #[test]
    fn test_delegate_and_revoke() {
        let mut ledger = ledger();
        ledger.delegate(&alice(), &bob()).unwrap();
        assert_eq!(ledger.get_delegatee(&alice()), Some(bob()));

        ledger.revoke_delegation(&alice()).unwrap();
        assert_eq!(ledger.get_delegatee(&alice()), None);
    }

    #[test]
    fn test_delegate_rejects_second_delegation() {
        let mut ledger = ledger();
        ledger.delegate(&alice(), &bob()).unwrap();
        assert_eq!(
            ledger.delegate(&alice(), &carol()),
            Err(LedgerError::AlreadyDelegated)
        );
        assert_eq!(ledger.get_delegatee(&alice()), Some(bob()));
    }

    #[test]
    fn test_revoke_requires_active_delegation() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.revoke_delegation(&alice()),
            Err(LedgerError::NoDelegation)
        );
    }

    #[test]
    fn test_delegate_rejects_zero_delegatee() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.delegate(&alice(), &Principal::zero()),
            Err(LedgerError::ZeroAccount)
        );
    }

    #[test]
    fn test_self_delegation_is_allowed() {
        let mut ledger = ledger();
        ledger.delegate(&alice(), &alice()).unwrap();
        assert_eq!(ledger.get_delegatee(&alice()), Some(alice()));
    }

    #[test]
    fn test_set_paused_requires_admin() {
        let mut ledger = ledger();
        assert_eq!(
            ledger.set_paused(&alice(), true),
            Err(LedgerError::NotAdmin)
        );
        assert!(!ledger.is_paused());
    }

    #[test]
    fn test_pause_and_resume() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();

        assert!(ledger.set_paused(&admin(), true).unwrap());
        assert_eq!(
            ledger.transfer(&alice(), &bob(), 100),
            Err(LedgerError::Paused)
        );

        assert!(!ledger.set_paused(&admin(), false).unwrap());
        ledger.transfer(&alice(), &bob(), 100).unwrap();
    }

    #[test]
    fn test_set_burn_fee_percent_bounds() {
        let mut ledger = ledger();
        assert_eq!(ledger.set_burn_fee_percent(&admin(), 5).unwrap(), 5);
        assert_eq!(
            ledger.set_burn_fee_percent(&admin(), 6),
            Err(LedgerError::InvalidAmount)
        );
        assert_eq!(
            ledger.set_burn_fee_percent(&alice(), 3),
            Err(LedgerError::NotAdmin)
        );
        assert_eq!(ledger.burn_fee_percent(), 5);
    }

    #[test]
    fn test_set_burn_fee_percent_works_while_paused() {
        let mut ledger = ledger();
        ledger.set_paused(&admin(), true).unwrap();
        assert_eq!(ledger.set_burn_fee_percent(&admin(), 0).unwrap(), 0);
    }

    #[test]
    fn test_rejected_calls_leave_state_unchanged() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.approve(&alice(), &carol(), 50).unwrap();
        ledger.delegate(&alice(), &bob()).unwrap();

        let before = ledger.state().clone();

        assert!(ledger.mint(&bob(), &alice(), 1).is_err());
        assert!(ledger.mint(&admin(), &alice(), 2_000_000).is_err());
        assert!(ledger.burn(&alice(), 2_000).is_err());
        assert!(ledger.transfer(&alice(), &Principal::zero(), 10).is_err());
        assert!(ledger.transfer(&bob(), &alice(), 10).is_err());
        assert!(ledger.transfer_from(&carol(), &alice(), &bob(), 100).is_err());
        assert!(ledger.stake(&alice(), 2_000).is_err());
        assert!(ledger.unstake(&alice(), 1).is_err());
        assert!(ledger.delegate(&alice(), &carol()).is_err());
        assert!(ledger.revoke_delegation(&bob()).is_err());

        assert_eq!(ledger.state(), &before);
    }

    #[test]
    fn test_bootstrap_rejects_bad_config() {
        assert_eq!(
            TokenLedger::new(LedgerConfig::new(Principal::zero())).unwrap_err(),
            LedgerError::ZeroAccount
        );
        assert_eq!(
            TokenLedger::new(LedgerConfig::new(admin()).with_burn_fee_percent(6)).unwrap_err(),
            LedgerError::InvalidAmount
        );
    }

    #[test]
    fn test_supply_report_and_integrity() {
        let mut ledger = ledger();
        ledger.mint(&admin(), &alice(), 1_000).unwrap();
        ledger.mint(&admin(), &bob(), 500).unwrap();
        ledger.stake(&alice(), 400).unwrap();
        ledger.transfer(&bob(), &carol(), 100).unwrap();

        let report = ledger.supply_report();
        assert_eq!(report.staked_total, 400);
        assert_eq!(report.total_supply, report.circulating + report.staked_total);

        let integrity = ledger.validate_integrity();
        assert!(integrity.is_valid, "issues: {:?}", integrity.issues);
    }
}
