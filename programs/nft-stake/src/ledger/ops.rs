use anchor_lang::prelude::*;

use crate::error::ErrorCode;
use crate::ledger::accrual;
use crate::states::{RateTable, StakeInfo, UserStakeInfo};

/// Opens a position for `class_id` in the user's book and credits the pool.
///
/// The class must be configured in the rate table before anything can be
/// staked against it; a zero rate is acceptable, a missing entry is not.
pub fn open_position(
    user_info: &mut UserStakeInfo,
    stake_info: &mut StakeInfo,
    table: &RateTable,
    class_id: u64,
    amount: u64,
    now: u64,
) -> Result<()> {
    table.rate(class_id)?;
    // validate the pool credit before the book mutates, all-or-nothing
    stake_info
        .total_staked
        .checked_add(amount)
        .ok_or(ErrorCode::MathOverflow)?;
    user_info.open(class_id, amount, now)?;
    stake_info.record_open(amount, now)?;
    Ok(())
}

/// Settles the user's position for `class_id` and debits the pool by the
/// settled amount.
///
/// Every fallible step runs before the first mutation, so a failed claim
/// (`InsufficientPool`, overflow) leaves the position and both books exactly
/// as they were; the accrual stays claimable by a later attempt. On chain the
/// runtime would revert the accounts anyway; checking first keeps the same
/// contract when the core is driven directly.
pub fn claim_position(
    user_info: &mut UserStakeInfo,
    stake_info: &mut StakeInfo,
    table: &RateTable,
    class_id: u64,
    now: u64,
) -> Result<u64> {
    let rate = table.rate(class_id)?;
    let reward = {
        let position = user_info.position(class_id).ok_or(ErrorCode::NotOwner)?;
        accrual::accrued(position, rate, now)?
    };
    let total_claimed = user_info
        .total_claimed
        .checked_add(reward)
        .ok_or(ErrorCode::MathOverflow)?;
    stake_info.debit_rewards(reward)?;
    if let Some(position) = user_info.position_mut(class_id) {
        position.last_claimed = now;
    }
    user_info.total_claimed = total_claimed;
    Ok(reward)
}

/// Closes the user's position for `class_id`, forcing a claim first so no
/// accrued reward is lost on exit. Returns the claimed reward and the staked
/// amount to release from escrow.
pub fn close_position(
    user_info: &mut UserStakeInfo,
    stake_info: &mut StakeInfo,
    table: &RateTable,
    class_id: u64,
    now: u64,
) -> Result<(u64, u64)> {
    let reward = claim_position(user_info, stake_info, table, class_id, now)?;
    let position = user_info.close(class_id, now)?;
    stake_info.record_close(position.amount, now)?;
    Ok((reward, position.amount))
}
