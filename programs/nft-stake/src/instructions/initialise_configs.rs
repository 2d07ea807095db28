use crate::error::ErrorCode;
use crate::states::*;
use crate::REWARD_VAULT_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Accounts context for `initialise_configs`.
///
/// This handler:
/// - Initializes the global configuration, pool statistics and rate table.
/// - Creates the program-owned reward vault that backs claim payouts.
#[derive(Accounts)]
pub struct InitialiseConfigs<'info> {
    /// Deployer signer (must match the program-level admin id).
    #[account(
        mut,
        address = crate::admin::id() @ ErrorCode::NotApproved
    )]
    pub owner: Signer<'info>,

    /// Program authority PDA, owner of all program token vaults.
    ///
    /// CHECK: PDA derivation enforced via seeds. Not read as an account; used as Pubkey.
    #[account(
        seeds = [crate::AUTH_SEED.as_bytes()],
        bump,
    )]
    pub authority: UncheckedAccount<'info>,

    /// Global configuration account holding protocol parameters.
    #[account(
        init,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump,
        payer = owner,
        space = GlobalConfig::LEN
    )]
    pub global_config: Account<'info, GlobalConfig>,

    /// Aggregate staking statistics and the reward pool counters.
    #[account(
        init,
        seeds = [STAKE_INFO_SEED.as_bytes()],
        bump,
        payer = owner,
        space = StakeInfo::LEN
    )]
    pub stake_info: Account<'info, StakeInfo>,

    /// Per-class reward rate table, filled by `set_reward_rate`.
    #[account(
        init,
        seeds = [RATE_TABLE_SEED.as_bytes()],
        bump,
        payer = owner,
        space = RateTable::LEN
    )]
    pub rate_table: Account<'info, RateTable>,

    /// Mint of the fungible reward token.
    pub reward_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Vault for reward payouts; `fund_rewards` deposits into it.
    #[account(
        init,
        seeds = [REWARD_VAULT_SEED.as_bytes()],
        bump,
        payer = owner,
        token::mint = reward_mint,
        token::authority = authority,
        token::token_program = token_program,
    )]
    pub reward_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program interface (required for vault creation).
    pub token_program: Interface<'info, TokenInterface>,

    pub system_program: Program<'info, System>,
}

pub fn initialise_configs(ctx: Context<InitialiseConfigs>, admin: Pubkey) -> Result<()> {
    require_keys_neq!(admin, Pubkey::default());

    let global_config = &mut ctx.accounts.global_config;
    global_config.bump = ctx.bumps.global_config;
    global_config.admin = admin;
    global_config.reward_mint = ctx.accounts.reward_mint.key();
    global_config.reward_vault = ctx.accounts.reward_vault.key();
    global_config.staking_enabled = true;
    global_config.claims_enabled = true;

    let stake_info = &mut ctx.accounts.stake_info;
    stake_info.bump = ctx.bumps.stake_info;

    let rate_table = &mut ctx.accounts.rate_table;
    rate_table.bump = ctx.bumps.rate_table;

    Ok(())
}
