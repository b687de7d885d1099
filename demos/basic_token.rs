//! Basic token ledger usage example

use farm_token_core::{LedgerConfig, Principal, TokenLedger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🌱 Farm Token - Basic Ledger Example\n");

    let admin = Principal::from("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
    let grower = Principal::from("ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG");
    let market = Principal::from("ST3NBRSFKX28FQ2ZJ1MAKX58HKHSDGNV5N7R21XCP");
    let broker = Principal::from("ST4PQ4WDB12GQ7BRE5MVJ63KZ0T9C4YFJ9X2V1NEH");

    let mut ledger = TokenLedger::new(LedgerConfig::new(admin.clone()))?;

    // 1. Mint starting balances
    println!("💰 Minting starting balances...");
    ledger.mint(&admin, &grower, 10_000)?;
    ledger.mint(&admin, &market, 2_500)?;
    println!("  ✓ Minted 10,000 tokens to {}", grower);
    println!("  ✓ Minted 2,500 tokens to {}", market);
    println!("  Total supply: {}\n", ledger.total_supply());

    // 2. Transfer with the burn fee
    println!(
        "🔁 Transferring 1,000 tokens at a {}% burn fee...",
        ledger.burn_fee_percent()
    );
    ledger.transfer(&grower, &market, 1_000)?;
    println!("  ✓ {} now holds {}", grower, ledger.get_balance(&grower));
    println!("  ✓ {} now holds {}", market, ledger.get_balance(&market));
    println!("  Total supply after fee burn: {}\n", ledger.total_supply());

    // 3. Delegated spending through an allowance
    println!("🤝 Approving a broker for delegated spending...");
    ledger.approve(&market, &broker, 500)?;
    ledger.transfer_from(&broker, &market, &grower, 300)?;
    println!(
        "  ✓ Broker spent 300 of the allowance; {} remains",
        ledger.get_allowance(&market, &broker)
    );
    println!("  ✓ {} now holds {}\n", grower, ledger.get_balance(&grower));

    // 4. Burn some tokens outright
    println!("🔥 Burning 200 tokens from the grower...");
    ledger.burn(&grower, 200)?;
    println!("  ✓ {} now holds {}", grower, ledger.get_balance(&grower));
    println!("  Total supply: {}\n", ledger.total_supply());

    // 5. Reports
    let report = ledger.supply_report();
    println!("📊 Supply report:");
    println!("  Total supply:  {}", report.total_supply);
    println!("  Circulating:   {}", report.circulating);
    println!("  Staked:        {}", report.staked_total);

    let integrity = ledger.validate_integrity();
    println!(
        "\n✅ Ledger integrity: {}",
        if integrity.is_valid { "valid" } else { "INVALID" }
    );

    Ok(())
}
