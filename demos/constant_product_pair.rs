//! Constant-product pair example (Uniswap V2 style, zero fee).
//!
//! Walks one pair through its life: registry creation, push-then-call
//! liquidity, a swap at the exact curve quote, a time-weighted average
//! price over one hour, and a full exit.
//!
//! # Run
//!
//! ```bash
//! cargo run --example constant_product_pair
//! ```

use pairwise_amm::config::PoolConfig;
use pairwise_amm::domain::{Address, Amount};
use pairwise_amm::exchange::{Exchange, ExchangeEvent};
use pairwise_amm::ledger::{ManualClock, Vault};
use pairwise_amm::math::mul_div_floor;
use pairwise_amm::traits::AssetCustody;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Constant-Product Pair (x · y = k, no fee) ===\n");

    // ── 1. Fund two accounts ────────────────────────────────────────────
    let usdc = Address::from_bytes([1u8; 32]);
    let weth = Address::from_bytes([2u8; 32]);
    let alice = Address::from_bytes([0xa1u8; 32]);
    let bob = Address::from_bytes([0xb0u8; 32]);

    let mut vault = Vault::new();
    vault.credit(&usdc, &alice, Amount::new(10_000_000))?;
    vault.credit(&weth, &alice, Amount::new(10_000_000))?;
    vault.credit(&usdc, &bob, Amount::new(1_000_000))?;
    println!("Alice: 10 000 000 USDC + 10 000 000 WETH");
    println!("Bob:    1 000 000 USDC");

    // ── 2. Create the pool through the registry ─────────────────────────
    let mut exchange = Exchange::new(PoolConfig::default(), vault, ManualClock::new(1_700_000_000))?;
    let pool = exchange.create_pool(weth, usdc)?;
    println!("\nPool created at {pool}");
    println!("  Pools in registry: {}", exchange.registry().pool_count());

    // ── 3. Push, then mint ──────────────────────────────────────────────
    exchange.push(&usdc, &alice, &pool, Amount::new(1_000_000))?;
    exchange.push(&weth, &alice, &pool, Amount::new(1_000_000))?;
    let shares = exchange.mint(&pool, &alice)?;
    println!("\n--- First deposit: 1 000 000 USDC + 1 000 000 WETH ---");
    println!("  Shares minted: {shares}");
    println!("  Total shares:  {}", exchange.pool(&pool)?.total_shares());

    let t0 = exchange.observe(&pool)?;

    // ── 4. Swap at the exact curve quote ────────────────────────────────
    let amount_in = 100_000u128;
    let (reserve_usdc, reserve_weth, _) = exchange.pool(&pool)?.reserves();
    let quote = mul_div_floor(
        reserve_weth.get(),
        amount_in,
        reserve_usdc.get() + amount_in,
        "quote",
    )?;
    exchange.push(&usdc, &bob, &pool, Amount::new(amount_in))?;
    let result = exchange.swap(&pool, Amount::ZERO, Amount::new(quote), &bob)?;
    println!("\n--- Swap: Bob sells {amount_in} USDC ---");
    println!("  Result:    {result}");
    println!(
        "  Bob WETH:  {}",
        exchange.custody().balance_of(&weth, &bob)
    );

    // A single unit more than the quote breaks the product.
    exchange.push(&usdc, &bob, &pool, Amount::new(amount_in))?;
    let (reserve_usdc, reserve_weth, _) = exchange.pool(&pool)?.reserves();
    let greedy = mul_div_floor(
        reserve_weth.get(),
        amount_in,
        reserve_usdc.get() + amount_in,
        "quote",
    )? + 1;
    match exchange.swap(&pool, Amount::ZERO, Amount::new(greedy), &bob) {
        Ok(_) => println!("  Greedy swap unexpectedly accepted"),
        Err(e) => println!("  Greedy swap for {greedy}: {e}"),
    }
    let (skimmed_usdc, _) = exchange.skim(&pool, &bob)?;
    println!("  Bob skims back his unused {skimmed_usdc} USDC");

    // ── 5. Time-weighted average price over one hour ────────────────────
    exchange.clock().advance(3_600);
    let t1 = exchange.observe(&pool)?;
    let (usdc_in_weth, weth_in_usdc) = t1.average_since(&t0)?;
    println!("\n--- TWAP over 3 600 s ---");
    println!("  USDC priced in WETH: {:.6}", usdc_in_weth.to_f64());
    println!("  WETH priced in USDC: {:.6}", weth_in_usdc.to_f64());

    // ── 6. Full exit ────────────────────────────────────────────────────
    let (out_usdc, out_weth) = exchange.burn(&pool, &alice)?;
    let p = exchange.pool(&pool)?;
    println!("\n--- Alice burns all her shares ---");
    println!("  Returned:      {out_usdc} USDC + {out_weth} WETH");
    println!("  Locked shares: {}", p.total_shares());
    println!("  Reserves left: {} / {}", p.reserves().0, p.reserves().1);

    // ── 7. The journal ──────────────────────────────────────────────────
    println!("\n--- Journal ---");
    for entry in exchange.take_journal() {
        match entry {
            ExchangeEvent::PoolCreated(created) => {
                println!("  created  (pool #{})", created.pool_count);
            }
            ExchangeEvent::Pool { event, .. } => println!("  {}", event.kind()),
        }
    }

    println!("\n=== Done ===");
    Ok(())
}
