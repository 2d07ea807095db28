use crate::error::ErrorCode;
use crate::ledger::ops;
use crate::states::*;
use crate::utils::{current_timestamp, transfer_from_pool_vault_to_user};
use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `unstake`.
///
/// Exits a position: the accrued reward is claimed first so nothing is lost,
/// the escrowed assets are returned, and the custody receipt is closed with
/// its rent refunded to the owner. Runs under the claims switch because it
/// embeds a claim.
#[derive(Accounts)]
#[instruction(class_id: u64)]
pub struct Unstake<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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

    /// Custody marker being released; only its recorded owner may unstake.
    #[account(
        mut,
        close = owner,
        seeds = [
            STAKE_RECEIPT_SEED.as_bytes(),
            &class_id.to_le_bytes()
        ],
        bump = stake_receipt.bump,
        constraint = stake_receipt.owner == owner.key() @ ErrorCode::NotOwner,
    )]
    pub stake_receipt: Account<'info, StakeReceipt>,

    /// Mint of the staked asset; must match the class registration.
    #[account(mint::token_program = token_program)]
    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    /// User's asset ATA; created if missing so the escrow can be returned.
    #[account(
        init_if_needed,
        payer = owner,
        associated_token::mint = asset_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_asset_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program escrow vault holding the staked assets.
    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = authority,
        associated_token::token_program = token_program,
    )]
    pub asset_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Program authority PDA that signs the vault transfers.
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

    /// Caller's reward ATA for the forced-claim payout.
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

pub fn unstake(ctx: Context<Unstake>, class_id: u64) -> Result<()> {
    let now = current_timestamp()?;

    let entry = ctx.accounts.rate_table.entry(class_id)?;
    require_keys_eq!(
        ctx.accounts.asset_mint.key(),
        entry.asset_mint,
        ErrorCode::InvalidAssetMint
    );

    let (reward, amount) = ops::close_position(
        &mut ctx.accounts.user_stake_info,
        &mut ctx.accounts.stake_info,
        &ctx.accounts.rate_table,
        class_id,
        now,
    )?;

    let signer_seeds: &[&[&[u8]]] = &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.authority]]];

    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.reward_vault.to_account_info(),
        ctx.accounts.owner_reward_token.to_account_info(),
        ctx.accounts.reward_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        reward,
        ctx.accounts.reward_mint.decimals,
        signer_seeds,
    )?;

    // return custody of the escrowed assets
    transfer_from_pool_vault_to_user(
        ctx.accounts.authority.to_account_info(),
        ctx.accounts.asset_vault.to_account_info(),
        ctx.accounts.owner_asset_token.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.asset_mint.decimals,
        signer_seeds,
    )?;

    emit!(Unstaked {
        user: ctx.accounts.owner.key(),
        class_id,
        amount,
        reward,
        timestamp: now,
    });

    Ok(())
}
