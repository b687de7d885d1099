//! Staking and vote delegation example with an event journal

use farm_token_core::utils::MemoryJournal;
use farm_token_core::{LedgerConfig, Principal, TokenLedger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌾 Farm Token - Staking & Delegation Example\n");

    let admin = Principal::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
    let grower = Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");
    let cooperative = Principal::from("ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5N7R21XCP");

    let journal = MemoryJournal::new();
    let mut ledger =
        TokenLedger::with_sink(LedgerConfig::new(admin.clone()), Box::new(journal.clone()))?;

    ledger.mint(&admin, &grower, 5_000)?;

    // 1. Stake part of the balance
    println!("🔒 Staking 3,000 of the grower's 5,000 tokens...");
    ledger.stake(&grower, 3_000)?;
    println!("  ✓ Spendable: {}", ledger.get_balance(&grower));
    println!("  ✓ Staked:    {}", ledger.get_staked(&grower));
    println!(
        "  Total supply is unchanged: {}\n",
        ledger.total_supply()
    );

    // 2. Delegate voting power to the cooperative
    println!("🗳️  Delegating voting power to the cooperative...");
    ledger.delegate(&grower, &cooperative)?;
    match ledger.get_delegatee(&grower) {
        Some(delegatee) => println!("  ✓ {} delegates to {}\n", grower, delegatee),
        None => println!("  (no delegation recorded)\n"),
    }

    // 3. Unstake a portion and revoke the delegation
    println!("🔓 Unstaking 1,000 tokens and revoking the delegation...");
    ledger.unstake(&grower, 1_000)?;
    ledger.revoke_delegation(&grower)?;
    println!("  ✓ Spendable: {}", ledger.get_balance(&grower));
    println!("  ✓ Staked:    {}", ledger.get_staked(&grower));
    println!(
        "  ✓ Delegation active: {}\n",
        ledger.get_delegatee(&grower).is_some()
    );

    // 4. Dump the event journal
    println!("📜 Event journal ({} records):", journal.len());
    for record in journal.records() {
        println!("  [{}] {:?}", record.recorded_at, record.event);
    }

    Ok(())
}
