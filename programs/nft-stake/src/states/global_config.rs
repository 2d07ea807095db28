use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Global Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the global configuration account.
pub const GLOBAL_CONFIG_SEED: &str = "global_config";

/// Stores protocol-wide configuration: the admin authority, the canonical
/// reward mint and vault, and the operational switches.
///
/// Created once at initialization (`InitialiseConfigs`) and referenced by
/// nearly all instructions.
#[account]
#[derive(Default, Debug)]
pub struct GlobalConfig {
    /// PDA bump for this account (for seed derivation).
    pub bump: u8,

    /// Current admin of the protocol (authorized to update config and rates).
    pub admin: Pubkey,

    /// Mint of the fungible reward token paid out by claims.
    pub reward_mint: Pubkey,

    /// Program-owned vault holding the reward pool backing
    /// `total_rewards_available`.
    pub reward_vault: Pubkey,

    /// Global switch: if `false`, opening new positions is disabled.
    pub staking_enabled: bool,

    /// Global switch: if `false`, claiming rewards is disabled. Unstaking is
    /// also blocked while claims are off, since it forces a claim.
    pub claims_enabled: bool,
}

impl GlobalConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 3: three Pubkeys
    /// - 1 + 1: two booleans
    pub const LEN: usize = 8 + 1 + 32 * 3 + 1 + 1;
}
