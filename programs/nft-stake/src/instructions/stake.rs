use crate::error::ErrorCode;
use crate::ledger::ops;
use crate::states::*;
use crate::utils::{current_timestamp, transfer_from_user_to_pool_vault};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `stake`.
///
/// Opens a position for `class_id` and escrows `amount` of the class's asset
/// mint into a program vault. The per-class receipt PDA enforces exclusive
/// custody: initializing it a second time while a stake is live fails, and a
/// live receipt owned by anyone trips `AlreadyStaked` before any state moves.
#[derive(Accounts)]
#[instruction(class_id: u64)]
pub struct Stake<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Global configuration; staking must be enabled.
    #[account(
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
        constraint = global_config.staking_enabled @ ErrorCode::StakingDisabled,
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Global stake meta (pool totals).
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

    /// Per-user staking metadata (created lazily).
    #[account(
        init_if_needed,
        seeds = [
            USER_STAKE_INFO_SEED.as_bytes(),
            owner.key().as_ref()
        ],
        bump,
        payer = owner,
        space = UserStakeInfo::LEN
    )]
    pub user_stake_info: Account<'info, UserStakeInfo>,

    /// Custody marker for this class id; its rent is refunded on unstake.
    #[account(
        init_if_needed,
        seeds = [
            STAKE_RECEIPT_SEED.as_bytes(),
            &class_id.to_le_bytes()
        ],
        bump,
        payer = owner,
        space = StakeReceipt::LEN
    )]
    pub stake_receipt: Account<'info, StakeReceipt>,

    /// Mint of the staked asset; must match the class registration.
    #[account(mint::token_program = token_program)]
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    /// User's token account holding the assets to escrow.
    #[account(
        mut,
        token::mint = asset_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_asset_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program escrow vault for this asset mint (created lazily).
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = asset_mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub asset_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program authority PDA owning the escrow vaults.
    ///
    /// CHECK: PDA derivation is enforced by seeds; used as vault authority only.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,

    pub associated_token_program: Program<'info, AssociatedToken>,

    pub system_program: Program<'info, System>,
}

pub fn stake(ctx: Context<Stake>, class_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::ZeroAmount);
    let now = current_timestamp()?;

    let entry = ctx.accounts.rate_table.entry(class_id)?;
    require_keys_eq!(
        ctx.accounts.asset_mint.key(),
        entry.asset_mint,
        ErrorCode::InvalidAssetMint
    );

    // A zeroed owner means the receipt was created by this instruction; any
    // other value means the class id is already held.
    let receipt = &mut ctx.accounts.stake_receipt;
    require_keys_eq!(receipt.owner, Pubkey::default(), ErrorCode::AlreadyStaked);
    receipt.bump = ctx.bumps.stake_receipt;
    receipt.owner = ctx.accounts.owner.key();
    receipt.class_id = class_id;

    let user_info = &mut ctx.accounts.user_stake_info;
    if user_info.owner == Pubkey::default() {
        user_info.bump = ctx.bumps.user_stake_info;
        user_info.owner = ctx.accounts.owner.key();
    }

    ops::open_position(
        user_info,
        &mut ctx.accounts.stake_info,
        &ctx.accounts.rate_table,
        class_id,
        amount,
        now,
    )?;

    // escrow custody; a failed transfer aborts the whole transaction
    transfer_from_user_to_pool_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_asset_token.to_account_info(),
        ctx.accounts.asset_vault.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.asset_mint.decimals,
    )?;

    emit!(Staked {
        user: ctx.accounts.owner.key(),
        class_id,
        amount,
        timestamp: now,
    });

    Ok(())
}
