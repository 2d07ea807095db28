use crate::error::ErrorCode;
use crate::states::{
    GlobalConfig, RewardsFunded, StakeInfo, GLOBAL_CONFIG_SEED, STAKE_INFO_SEED,
};
use crate::utils::transfer_from_user_to_pool_vault;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `fund_rewards`.
///
/// Permissionless deposit into the reward pool: anyone may top up
/// `total_rewards_available` by transferring reward tokens into the vault.
#[derive(Accounts)]
pub struct FundRewards<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,

    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [STAKE_INFO_SEED.as_bytes()],
        bump = stake_info.bump,
    )]
    pub stake_info: Account<'info, StakeInfo>,

    #[account(
        address = global_config.reward_mint @ ErrorCode::InvalidRewardMint,
        mint::token_program = token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Funder's reward token account, debited by `amount`.
    #[account(
        mut,
        token::mint = reward_mint,
        token::authority = funder,
        token::token_program = token_program,
    )]
    pub funder_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program reward vault, credited by `amount`.
    #[account(
        mut,
        address = global_config.reward_vault,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);

    transfer_from_user_to_pool_vault(
        ctx.accounts.funder.to_account_info(),
        ctx.accounts.funder_reward_token.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.reward_mint.decimals,
    )?;

    ctx.accounts.stake_info.fund(amount)?;

    emit!(RewardsFunded {
        funder: ctx.accounts.funder.key(),
        amount,
    });

    Ok(())
}
