use crate::error::ErrorCode;
use crate::states::{ConfigUpdated, GlobalConfig, GLOBAL_CONFIG_SEED};
use anchor_lang::prelude::*;

/// Accounts context for the `update_config` instruction.
///
/// Only the current `admin` stored in `global_config` or the program-level
/// admin may update configuration parameters.
#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    /// Authorized signer: must be the stored admin or the hardcoded program admin.
    #[account(
        constraint = (owner.key() == global_config.admin || owner.key() == crate::admin::id()) @ ErrorCode::NotApproved
    )]
    pub owner: Signer<'info>,

    /// Global configuration account to be updated.
    #[account(
        mut,
        seeds = [GLOBAL_CONFIG_SEED.as_bytes()],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
}

/// Updates selected fields of the global configuration.
///
/// # Param Mapping
/// - `0`: **Admin change** → Expects the new admin Pubkey passed via `remaining_accounts[0]`.
/// - `1`: **staking_enabled** → Toggles staking (bool, from nonzero value).
/// - `2`: **claims_enabled** → Toggles claims and unstaking (bool, from nonzero value).
///
/// Any other `param` value returns `ErrorCode::InvalidParam`.
pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
    let global_config = &mut ctx.accounts.global_config;
    match param {
        // Update admin (requires new admin key from remaining_accounts[0])
        0 => {
            let new_admin = *ctx
                .remaining_accounts
                .iter()
                .next()
                .ok_or(error!(ErrorCode::MissingRemainingAccount))?
                .key;
            require_keys_neq!(new_admin, Pubkey::default());
            global_config.admin = new_admin;
        }
        1 => global_config.staking_enabled = value != 0,
        2 => global_config.claims_enabled = value != 0,
        _ => return Err(ErrorCode::InvalidParam.into()),
    }

    emit!(ConfigUpdated { param, value });

    Ok(())
}
