use crate::error::ErrorCode;
use crate::ledger::ops;
use crate::states::*;
use crate::utils::{current_timestamp, transfer_from_pool_vault_to_user};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `claim`.
///
/// Settles the caller's position for one class id and pays the settled
/// reward out of the program vault. If the pool cannot cover the settlement
/// the whole transaction fails with `InsufficientPool` and no timestamp
/// advances.
#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Global configuration; claims must be enabled.
    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
        constraint = global_config.claims_enabled @ ErrorCode::ClaimsDisabled,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    #[account(
        mut,
        seeds = [STAKE_INFO_SEED.as_bytes()],
        bump = stake_info.bump,
    )]
    pub stake_info: Account<'info, StakeInfo>,

    #[account(
        seeds = [RATE_TABLE_SEED.as_bytes()],
        bump = rate_table.bump,
    )]
    pub rate_table: Account<'info, RateTable>,

    #[account(
        mut,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump = user_stake_info.bump,
        constraint = user_stake_info.owner == owner.key() @ ErrorCode::NotOwner,
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    /// Program authority PDA that signs the payout.
    ///
    /// CHECK: PDA derivation is enforced by seeds; used as vault authority only.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    #[account(
        address = global_config.reward_mint @ ErrorCode::InvalidRewardMint,
        mint::token_program = token_program,
    )]
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        address = global_config.reward_vault,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Caller's reward ATA; created if missing so they can receive the payout.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = reward_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_reward_token: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

pub fn claim(ctx: Context<Claim>, class_id: u64) -> Result<()> {
    let now = current_timestamp()?;

    let reward = ops::claim_position(
        &mut ctx.accounts.user_stake_info,
        &mut ctx.accounts.stake_info,
        &ctx.accounts.rate_table,
        class_id,
        now,
    )?;

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_reward_token.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        reward,
        ctx.accounts.reward_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]],
    )?;

    emit!(RewardsClaimed {
        user: ctx.accounts.owner.key(),
        class_id,
        reward,
        timestamp: now,
    });

    Ok(())
}
