//! End-to-end properties of the accounting core, driven the way the
//! instruction handlers drive it: one operation per "transaction", with a
//! monotonically non-decreasing clock injected per step.

use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;

use nft_stake::error::ErrorCode;
use nft_stake::ledger::{accrual, ops};
use nft_stake::states::{RateTable, StakeInfo, UserStakeInfo};
use nft_stake::PRECISION;

use proptest::prelude::*;
use rand::Rng;

const UNIT_RATE: u64 = PRECISION as u64;

fn assert_err(err: Error, expected: ErrorCode) {
    let expected: Error = expected.into();
    match (err, expected) {
        (Error::AnchorError(got), Error::AnchorError(want)) => {
            assert_eq!(got.error_code_number, want.error_code_number)
        }
        (got, _) => panic!("unexpected error shape: {got}"),
    }
}

fn table_with(entries: &[(u64, u64)]) -> RateTable {
    let mut table = RateTable::default();
    for &(class_id, rate) in entries {
        table.upsert(class_id, Pubkey::new_unique(), rate).unwrap();
    }
    table
}

#[test]
fn rate_lookup_distinguishes_zero_from_unknown() {
    let table = table_with(&[(1, 0)]);
    assert_eq!(table.rate(1).unwrap(), 0);
    assert_err(table.rate(2).unwrap_err(), ErrorCode::UnknownClass);
}

#[test]
fn worked_example_from_the_external_contract() {
    // rate for class 7 = 1 unit/time/amount; stake id=7, amount=100 at t=0
    let table = table_with(&[(7, UNIT_RATE)]);
    let mut pool = StakeInfo::default();
    pool.fund(5_000).unwrap();
    let mut user = UserStakeInfo::default();

    ops::open_position(&mut user, &mut pool, &table, 7, 100, 0).unwrap();

    // at t=10 the reportable total is 100 * 1 * 10 = 1000
    assert_eq!(accrual::total_rewards_for(&user, &table, 10).unwrap(), 1000);
    assert_eq!(pool.stats().total_staked, 100);

    // claim at t=10 debits the pool by exactly the settled amount
    let reward = ops::claim_position(&mut user, &mut pool, &table, 7, 10).unwrap();
    assert_eq!(reward, 1000);
    assert_eq!(pool.stats().total_rewards_available, 4_000);
    assert_eq!(accrual::total_rewards_for(&user, &table, 10).unwrap(), 0);
}

#[test]
fn failed_claim_leaves_every_counter_untouched() {
    let table = table_with(&[(7, UNIT_RATE)]);
    let mut pool = StakeInfo::default();
    pool.fund(500).unwrap();
    let mut user = UserStakeInfo::default();

    ops::open_position(&mut user, &mut pool, &table, 7, 100, 0).unwrap();
    let stats_before = pool.stats();
    let positions_before = user.positions.clone();

    assert_err(
        ops::claim_position(&mut user, &mut pool, &table, 7, 10).unwrap_err(),
        ErrorCode::InsufficientPool,
    );

    assert_eq!(pool.stats(), stats_before);
    assert_eq!(user.positions, positions_before);
    assert_eq!(user.total_claimed, 0);
}

#[test]
fn queries_are_pure() {
    let table = table_with(&[(1, UNIT_RATE), (2, 3)]);
    let mut pool = StakeInfo::default();
    pool.fund(1_000_000).unwrap();
    let mut user = UserStakeInfo::default();
    ops::open_position(&mut user, &mut pool, &table, 1, 10, 0).unwrap();
    ops::open_position(&mut user, &mut pool, &table, 2, 99, 4).unwrap();

    let user_snapshot = user.clone();
    let pool_snapshot = pool.clone();

    for now in [4, 10, 1_000, u32::MAX as u64] {
        let _ = table.rate(1).unwrap();
        let _ = pool.stats();
        let _ = accrual::total_rewards_for(&user, &table, now).unwrap();
        let _ = &user.positions;
    }

    assert_eq!(user.positions, user_snapshot.positions);
    assert_eq!(user.total_claimed, user_snapshot.total_claimed);
    assert_eq!(pool.total_staked, pool_snapshot.total_staked);
    assert_eq!(
        pool.total_rewards_available,
        pool_snapshot.total_rewards_available
    );
}

#[test]
fn interleaved_claims_at_random_times_never_overpay() {
    // A claim settles exactly the window since the previous settlement, so a
    // random claim schedule pays out the same total as one final claim would.
    let table = table_with(&[(1, UNIT_RATE)]);
    let mut rng = rand::rng();

    let amount: u64 = rng.random_range(1..=10_000);
    let horizon: u64 = 1_000;

    let mut pool = StakeInfo::default();
    pool.fund(u64::MAX / 2).unwrap();
    let mut user = UserStakeInfo::default();
    ops::open_position(&mut user, &mut pool, &table, 1, amount, 0).unwrap();

    let mut paid: u64 = 0;
    let mut now: u64 = 0;
    while now < horizon {
        now += rng.random_range(1..=50);
        paid += ops::claim_position(&mut user, &mut pool, &table, 1, now.min(horizon)).unwrap();
        now = now.min(horizon);
    }
    assert_eq!(paid, amount * horizon);
}

proptest! {
    /// No-loss-on-exit: whatever the claim history, exiting at `t_exit` pays
    /// the full remaining accrual and leaves nothing reportable behind.
    #[test]
    fn exit_pays_full_accrual(
        amount in 1u64..100_000,
        rate in 0u64..(10 * UNIT_RATE),
        claim_at in 0u64..5_000,
        exit_after in 0u64..5_000,
    ) {
        let table = table_with(&[(1, rate)]);
        let mut pool = StakeInfo::default();
        pool.fund(u64::MAX / 2).unwrap();
        let mut user = UserStakeInfo::default();

        ops::open_position(&mut user, &mut pool, &table, 1, amount, 0).unwrap();
        let mut paid = ops::claim_position(&mut user, &mut pool, &table, 1, claim_at).unwrap();

        let t_exit = claim_at + exit_after;
        let pending = accrual::total_rewards_for(&user, &table, t_exit).unwrap();
        let (reward, released) = ops::close_position(&mut user, &mut pool, &table, 1, t_exit).unwrap();
        paid += reward;

        prop_assert_eq!(reward, pending);
        prop_assert_eq!(released, amount);
        prop_assert_eq!(accrual::total_rewards_for(&user, &table, t_exit + 1_000).unwrap(), 0);
        prop_assert_eq!(pool.total_staked, 0);
        // both settlement windows together never exceed the single-window figure
        let single = {
            let mut fresh = UserStakeInfo::default();
            let mut fresh_pool = StakeInfo::default();
            fresh_pool.fund(u64::MAX / 2).unwrap();
            ops::open_position(&mut fresh, &mut fresh_pool, &table, 1, amount, 0).unwrap();
            ops::claim_position(&mut fresh, &mut fresh_pool, &table, 1, t_exit).unwrap()
        };
        prop_assert!(paid <= single);
    }

    /// `last_claimed` is non-decreasing across any claim schedule.
    #[test]
    fn settlement_timestamps_are_monotone(times in proptest::collection::vec(0u64..10_000, 1..20)) {
        let table = table_with(&[(1, UNIT_RATE)]);
        let mut pool = StakeInfo::default();
        pool.fund(u64::MAX / 2).unwrap();
        let mut user = UserStakeInfo::default();
        ops::open_position(&mut user, &mut pool, &table, 1, 5, 0).unwrap();

        let mut sorted = times;
        sorted.sort_unstable();
        let mut previous = 0u64;
        for now in sorted {
            ops::claim_position(&mut user, &mut pool, &table, 1, now).unwrap();
            let position = user.position(1).unwrap();
            prop_assert!(position.last_claimed >= previous);
            prop_assert_eq!(position.last_claimed, now);
            previous = now;
        }
    }
}
