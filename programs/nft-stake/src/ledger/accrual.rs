use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::states::{RateTable, StakePosition, UserStakeInfo};
use crate::PRECISION;

/// Reward accrued by `position` for the window since its last settlement.
///
/// Linear time-weighted accrual: `amount * rate * elapsed / PRECISION`,
/// computed in `u128` and truncated toward zero. No compounding within a
/// window; two settlements at `t1 < t2` pay exactly what one settlement at
/// `t2` would have, up to truncation.
///
/// `now` earlier than the last settlement is a fatal precondition violation
/// (`ClockRegression`), not a recoverable condition: under a correct clock
/// it must never happen.
pub fn accrued(position: &StakePosition, rate: u64, now: u64) -> Result<u64> {
    require!(now >= position.last_claimed, ErrorCode::ClockRegression);
    let elapsed = now - position.last_claimed;
    let gross = (position.amount as u128)
        .checked_mul(rate as u128)
        .and_then(|v| v.checked_mul(elapsed as u128))
        .and_then(|v| v.checked_div(PRECISION))
        .ok_or(ErrorCode::MathOverflow)?;
    u64::try_from(gross).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Settles the position at `now`: computes the accrued reward and advances
/// `last_claimed`. Token movement and pool debit are the caller's job.
pub fn settle(position: &mut StakePosition, rate: u64, now: u64) -> Result<u64> {
    let reward = accrued(position, rate, now)?;
    position.last_claimed = now;
    Ok(reward)
}

/// Sum of unsettled accruals over all of the user's positions. Read-only;
/// does not advance any settlement timestamp.
pub fn total_rewards_for(user_info: &UserStakeInfo, table: &RateTable, now: u64) -> Result<u64> {
    let mut total: u64 = 0;
    for position in &user_info.positions {
        let rate = table.rate(position.class_id)?;
        total = total
            .checked_add(accrued(position, rate, now)?)
            .ok_or(ErrorCode::MathOverflow)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::RateEntry;
    use anchor_lang::error::Error;
    use quickcheck::quickcheck;

    fn position(amount: u64, opened_at: u64) -> StakePosition {
        StakePosition {
            class_id: 1,
            amount,
            staked_at: opened_at,
            last_claimed: opened_at,
        }
    }

    fn assert_err(err: Error, expected: ErrorCode) {
        let expected: Error = expected.into();
        match (err, expected) {
            (Error::AnchorError(got), Error::AnchorError(want)) => {
                assert_eq!(got.error_code_number, want.error_code_number)
            }
            (got, _) => panic!("unexpected error shape: {got}"),
        }
    }

    /// Whole-unit rate: one reward base unit per staked unit per second.
    const UNIT_RATE: u64 = PRECISION as u64;

    #[test]
    fn linear_in_amount_rate_and_time() {
        let p = position(100, 0);
        assert_eq!(accrued(&p, UNIT_RATE, 10).unwrap(), 1000);
        assert_eq!(accrued(&p, UNIT_RATE / 2, 10).unwrap(), 500);
        assert_eq!(accrued(&p, UNIT_RATE, 20).unwrap(), 2000);
    }

    #[test]
    fn zero_elapsed_accrues_nothing() {
        let p = position(100, 50);
        assert_eq!(accrued(&p, UNIT_RATE, 50).unwrap(), 0);
    }

    #[test]
    fn zero_rate_is_valid_and_accrues_nothing() {
        let p = position(100, 0);
        assert_eq!(accrued(&p, 0, 1_000_000).unwrap(), 0);
    }

    #[test]
    fn truncates_toward_zero() {
        // 3 units at 1/3 of a unit rate for 1 second: 3 * (PRECISION / 3) / PRECISION = 0
        let p = position(3, 0);
        let third = UNIT_RATE / 3;
        assert_eq!(accrued(&p, third, 1).unwrap(), 0);
        // over 3 seconds the product divides out to 2 (333_333_333 * 9 / 1e9)
        assert_eq!(accrued(&p, third, 3).unwrap(), 2);
    }

    #[test]
    fn clock_regression_is_an_error() {
        let p = position(100, 100);
        assert_err(
            accrued(&p, UNIT_RATE, 99).unwrap_err(),
            ErrorCode::ClockRegression,
        );
    }

    #[test]
    fn overflow_is_an_error() {
        let p = position(u64::MAX, 0);
        assert_err(
            accrued(&p, UNIT_RATE, u64::MAX).unwrap_err(),
            ErrorCode::MathOverflow,
        );
    }

    #[test]
    fn settle_advances_last_claimed_only() {
        let mut p = position(100, 5);
        let reward = settle(&mut p, UNIT_RATE, 15).unwrap();
        assert_eq!(reward, 1000);
        assert_eq!(p.last_claimed, 15);
        assert_eq!(p.staked_at, 5);
        assert_eq!(p.amount, 100);
        // settling again at the same instant is a no-op
        assert_eq!(settle(&mut p, UNIT_RATE, 15).unwrap(), 0);
        assert_eq!(p.last_claimed, 15);
    }

    #[test]
    fn total_rewards_sums_positions_without_mutation() {
        let mut user = UserStakeInfo::default();
        user.open(1, 100, 0).unwrap();
        user.open(2, 50, 0).unwrap();
        let mut table = RateTable::default();
        table.entries.push(RateEntry {
            class_id: 1,
            asset_mint: Pubkey::default(),
            rate: UNIT_RATE,
        });
        table.entries.push(RateEntry {
            class_id: 2,
            asset_mint: Pubkey::default(),
            rate: 2 * UNIT_RATE,
        });
        let before = user.positions.clone();
        assert_eq!(total_rewards_for(&user, &table, 10).unwrap(), 1000 + 1000);
        assert_eq!(user.positions, before);
    }

    #[test]
    fn total_rewards_fails_on_unknown_class() {
        let mut user = UserStakeInfo::default();
        user.open(9, 10, 0).unwrap();
        let table = RateTable::default();
        assert_err(
            total_rewards_for(&user, &table, 10).unwrap_err(),
            ErrorCode::UnknownClass,
        );
    }

    // Generated magnitudes are bounded (u32 amounts/rates, u16 windows) so the
    // accrual product always fits in u64; overflow itself is pinned by
    // `overflow_is_an_error`.
    quickcheck! {
        /// Accrual is monotone in `now` while no settlement happens.
        fn accrual_monotone_in_time(amount: u32, rate: u32, t1: u16, t2: u16) -> bool {
            let (t1, t2) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let p = position(amount as u64, 0);
            let a1 = accrued(&p, rate as u64, t1 as u64).unwrap();
            let a2 = accrued(&p, rate as u64, t2 as u64).unwrap();
            a2 >= a1
        }

        /// Settling at `last_claimed` yields zero and leaves state unchanged.
        fn settle_idempotent_on_zero_elapsed(amount: u32, rate: u32, at: u32) -> bool {
            let mut p = position(amount as u64, at as u64);
            let before = p;
            settle(&mut p, rate as u64, at as u64).unwrap() == 0 && p == before
        }

        /// Splitting a window into two settlements never pays more than the
        /// single-settlement total (truncation can only lose dust).
        fn split_settlement_never_overpays(amount: u32, rate: u32, t1: u16, dt: u16) -> bool {
            let whole = {
                let mut p = position(amount as u64, 0);
                settle(&mut p, rate as u64, t1 as u64 + dt as u64).unwrap()
            };
            let split = {
                let mut p = position(amount as u64, 0);
                let first = settle(&mut p, rate as u64, t1 as u64).unwrap();
                first + settle(&mut p, rate as u64, t1 as u64 + dt as u64).unwrap()
            };
            split <= whole
        }
    }
}
