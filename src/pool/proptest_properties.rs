//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Product monotonicity** — an accepted swap never shrinks `ra · rb`.
//! 2. **Quote boundary** — the largest output the curve allows is
//!    accepted, and one unit more is rejected.
//! 3. **Round trip** — mint then burn never returns more than deposited.
//! 4. **No dilution** — a deposit never lowers the assets backing a share.
//! 5. **Observation consistency** — a counterfactual observation equals
//!    the accumulators after a real sync at the same instant.
//! 6. **Wraparound cancels** — a window whose accumulators overflow 256
//!    bits and whose clock overflows 32 bits still averages to the
//!    constant price.

#![allow(clippy::panic)]

use proptest::prelude::*;

use ethnum::U256;

use super::test_support::*;
use crate::domain::Amount;
use crate::error::AmmError;
use crate::math::{wide_mul, Uq112x112};

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10^24].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000_000_000_000_000u128
}

/// Input as a fraction of the reserve, in basis points [1, 50_000].
fn input_bps_strategy() -> impl Strategy<Value = u128> {
    1u128..=50_000u128
}

fn scaled(reserve: u128, bps: u128) -> u128 {
    (reserve / 10_000).saturating_mul(bps).max(1)
}

/// Largest `b` output for `a_in` pushed, at zero fee.
fn max_out(ra: u128, rb: u128, a_in: u128) -> u128 {
    let Ok(out) = crate::math::mul_div_floor(rb, a_in, ra + a_in, "quote") else {
        panic!("quote fits");
    };
    out
}

// ---------------------------------------------------------------------------
// Properties 1 and 2: the swap curve
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_never_shrinks_product(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        in_bps in input_bps_strategy(),
        out_bps in input_bps_strategy(),
    ) {
        let (mut pool, mut vault, clock) = seeded(ra, rb);
        let a_in = scaled(ra, in_bps);
        let b_out = scaled(rb, out_bps / 5).min(rb - 1);
        push(&mut vault, &pool, a_in, 0);

        let (before_a, before_b, _) = pool.reserves();
        let outcome = pool.swap(&mut vault, &clock, Amount::ZERO, Amount::new(b_out), &bob());
        let (after_a, after_b, _) = pool.reserves();
        match outcome {
            Ok(_) => prop_assert!(
                wide_mul(after_a.get(), after_b.get()) >= wide_mul(before_a.get(), before_b.get())
            ),
            Err(e) => {
                prop_assert_eq!(e, AmmError::InvalidK);
                prop_assert_eq!((after_a, after_b), (before_a, before_b));
            }
        }
    }

    #[test]
    fn prop_quote_boundary_is_exact(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        in_bps in input_bps_strategy(),
    ) {
        let a_in = scaled(ra, in_bps);
        let out = max_out(ra, rb, a_in);
        prop_assume!(out > 0 && out + 1 < rb);

        let (mut greedy, mut greedy_vault, clock) = seeded(ra, rb);
        push(&mut greedy_vault, &greedy, a_in, 0);
        prop_assert_eq!(
            greedy.swap(&mut greedy_vault, &clock, Amount::ZERO, Amount::new(out + 1), &bob()),
            Err(AmmError::InvalidK)
        );

        let (mut fair, mut fair_vault, clock) = seeded(ra, rb);
        push(&mut fair_vault, &fair, a_in, 0);
        prop_assert!(fair
            .swap(&mut fair_vault, &clock, Amount::ZERO, Amount::new(out), &bob())
            .is_ok());
    }
}

// ---------------------------------------------------------------------------
// Properties 3 and 4: liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_mint_burn_round_trip_never_profits(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da_bps in input_bps_strategy(),
        db_bps in input_bps_strategy(),
    ) {
        let (mut pool, mut vault, clock) = seeded(ra, rb);
        let (da, db) = (scaled(ra, da_bps), scaled(rb, db_bps));
        push(&mut vault, &pool, da, db);

        let minted = pool.mint(&mut vault, &clock, &bob());
        // a deposit tiny against the supply can round to zero shares
        prop_assume!(minted != Err(AmmError::InsufficientLiquidityMinted));
        prop_assert!(minted.is_ok(), "mint: {:?}", minted);

        let burned = pool.burn(&mut vault, &clock, &bob());
        prop_assume!(burned != Err(AmmError::InsufficientLiquidityBurned));
        let (out_a, out_b) = match burned {
            Ok(out) => out,
            Err(e) => return Err(TestCaseError::fail(format!("burn: {e:?}"))),
        };
        prop_assert!(out_a.get() <= da, "a: {} > {}", out_a, da);
        prop_assert!(out_b.get() <= db, "b: {} > {}", out_b, db);
    }

    #[test]
    fn prop_deposit_never_dilutes(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da_bps in input_bps_strategy(),
        db_bps in input_bps_strategy(),
    ) {
        let (mut pool, mut vault, clock) = seeded(ra, rb);
        let (ra0, rb0, _) = pool.reserves();
        let t0 = pool.total_shares().get();
        push(&mut vault, &pool, scaled(ra, da_bps), scaled(rb, db_bps));
        let minted = pool.mint(&mut vault, &clock, &bob());
        prop_assume!(minted != Err(AmmError::InsufficientLiquidityMinted));
        prop_assert!(minted.is_ok(), "mint: {:?}", minted);
        let (ra1, rb1, _) = pool.reserves();
        let t1 = pool.total_shares().get();
        // ra1 / t1 >= ra0 / t0, cross-multiplied
        prop_assert!(wide_mul(ra1.get(), t0) >= wide_mul(ra0.get(), t1));
        prop_assert!(wide_mul(rb1.get(), t0) >= wide_mul(rb0.get(), t1));
    }
}

// ---------------------------------------------------------------------------
// Properties 5 and 6: the price accumulator
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_observe_matches_sync(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        elapsed in 0u64..=(u64::from(u32::MAX) * 2),
    ) {
        let (mut pool, mut vault, clock) = seeded(ra, rb);
        clock.advance(elapsed);
        let Ok(obs) = pool.observe(&clock) else {
            panic!("observe");
        };
        let Ok(()) = pool.sync_reserves(&mut vault, &clock) else {
            panic!("sync");
        };
        prop_assert_eq!(obs.price_a_cumulative(), pool.price_a_cumulative());
        prop_assert_eq!(obs.price_b_cumulative(), pool.price_b_cumulative());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_average_survives_accumulator_and_clock_wrap(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        elapsed in 2u32..=2_592_000u32,
        headroom_a_bps in 0u32..10_000u32,
        headroom_b_bps in 0u32..10_000u32,
    ) {
        let (mut pool, mut vault, clock) = seeded(ra, rb);
        let Ok(price_a) = Uq112x112::encode(rb).checked_div(ra) else {
            panic!("price a");
        };
        let Ok(price_b) = Uq112x112::encode(ra).checked_div(rb) else {
            panic!("price b");
        };

        // park the truncated clock elapsed/2 seconds short of 2^32
        clock.set((2u64 << 32) + u64::from(u32::MAX - elapsed / 2));
        let Ok(()) = pool.sync_reserves(&mut vault, &clock) else {
            panic!("sync");
        };

        // leave less headroom below U256::MAX than the window will add
        let below_max = |price: Uq112x112, bps: u32| {
            let growth = price.raw() * U256::from(elapsed);
            Uq112x112::from_raw(U256::MAX - growth * U256::from(bps) / U256::from(10_000u32))
        };
        pool.price_a_cumulative = below_max(price_a, headroom_a_bps);
        pool.price_b_cumulative = below_max(price_b, headroom_b_bps);

        let Ok(t0) = pool.observe(&clock) else {
            panic!("observe t0");
        };
        clock.advance(u64::from(elapsed));
        let Ok(t1) = pool.observe(&clock) else {
            panic!("observe t1");
        };

        prop_assert!(t1.timestamp().get() < t0.timestamp().get());
        prop_assert!(t1.price_a_cumulative().raw() < t0.price_a_cumulative().raw());
        prop_assert!(t1.price_b_cumulative().raw() < t0.price_b_cumulative().raw());

        let Ok((avg_a, avg_b)) = t1.average_since(&t0) else {
            panic!("average");
        };
        prop_assert_eq!(avg_a, price_a);
        prop_assert_eq!(avg_b, price_b);
    }
}
