use crate::ledger::accrual;
use crate::states::*;
use crate::utils::current_timestamp;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Read-only queries
// ──────────────────────────────────────────────────────────────────────────────
//
// These mirror the external helper surface one-to-one. Every account is taken
// immutably; a query can never advance a settlement timestamp or touch a pool
// counter, regardless of call context.
//

#[derive(Accounts)]
pub struct GetRewardRate<'info> {
    #[account(
        seeds = [RATE_TABLE_SEED.as_bytes()],
        bump = rate_table.bump,
    )]
    pub rate_table: Account<'info, RateTable>,
}

/// Configured accrual rate for `class_id`; `UnknownClass` if absent. A zero
/// rate is a successful response, not an error.
pub fn get_reward_rate(ctx: Context<GetRewardRate>, class_id: u64) -> Result<u64> {
    ctx.accounts.rate_table.rate(class_id)
}

#[derive(Accounts)]
pub struct GetStakingStats<'info> {
    #[account(
        seeds = [STAKE_INFO_SEED.as_bytes()],
        bump = stake_info.bump,
    )]
    pub stake_info: Account<'info, StakeInfo>,
}

pub fn get_staking_stats(ctx: Context<GetStakingStats>) -> Result<StakingStats> {
    Ok(ctx.accounts.stake_info.stats())
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetTotalRewards<'info> {
    #[account(
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            user.as_ref()
        ],
        bump = user_stake_info.bump,
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    #[account(
        seeds = [RATE_TABLE_SEED.as_bytes()],
        bump = rate_table.bump,
    )]
    pub rate_table: Account<'info, RateTable>,
}

/// Sum of the user's unsettled accruals at the transaction timestamp.
///
/// The per-user account only exists once the user has staked, so for an
/// address that never staked this fails with Anchor's account-not-initialized
/// error rather than returning zero; callers should read that as "no stakes".
pub fn get_total_rewards(ctx: Context<GetTotalRewards>, _user: Pubkey) -> Result<u64> {
    let now = current_timestamp()?;
    accrual::total_rewards_for(
        &ctx.accounts.user_stake_info,
        &ctx.accounts.rate_table,
        now,
    )
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct GetUserStakes<'info> {
    #[account(
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            user.as_ref()
        ],
        bump = user_stake_info.bump,
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,
}

/// The user's open positions in the order they were opened.
///
/// Like `get_total_rewards`, this resolves the per-user account and so fails
/// with account-not-initialized for an address that never staked; "no
/// account" means an empty position list, not an error in the ledger.
pub fn get_user_stakes(ctx: Context<GetUserStakes>, _user: Pubkey) -> Result<Vec<StakePosition>> {
    Ok(ctx.accounts.user_stake_info.positions.clone())
}
