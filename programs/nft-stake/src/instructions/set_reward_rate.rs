use crate::error::ErrorCode;
use crate::states::{GlobalConfig, RateTable, RewardRateUpdated, GLOBAL_CONFIG_SEED, RATE_TABLE_SEED};
use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

/// Accounts context for `set_reward_rate`.
///
/// Binds an asset class id to its mint and accrual rate. Existing entries may
/// have their rate changed (including to zero); the mint binding is fixed on
/// first insert.
#[derive(Accounts)]
pub struct SetRewardRate<'info> {
    /// Authorized signer: must be the stored admin or the hardcoded program admin.
    #[account(
        constraint = (owner.key() == global_config.admin || owner.key() == crate::admin::id()) @ ErrorCode::NotApproved
    )]
    pub owner: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [RATE_TABLE_SEED.as_bytes()],
        bump = rate_table.bump,
    )]
    pub rate_table: Account<'info, RateTable>,

    /// Mint of the asset staked under this class id.
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,
}

pub fn set_reward_rate(ctx: Context<SetRewardRate>, class_id: u64, rate: u64) -> Result<()> {
    let asset_mint = ctx.accounts.asset_mint.key();
    ctx.accounts.rate_table.upsert(class_id, asset_mint, rate)?;

    emit!(RewardRateUpdated {
        class_id,
        asset_mint,
        rate,
    });

    Ok(())
}
