use anchor_lang::prelude::*;

declare_id!("BboB6BWx81nUVppcmUVg3R7EEztuCYeiymiybjxP5xzs");

pub mod admin {
    use anchor_lang::prelude::declare_id;
    declare_id!("8kdtKBPWhhzRFqQnY5ZxiXYQB9PMvuUgFK6VDHLJ6Bwx");
}

pub const AUTH_SEED: &str = "stake_vault_auth";
pub const REWARD_VAULT_SEED: &str = "reward_vault";

/// Fixed-point scale for reward rates: a rate of `PRECISION` pays one reward
/// base unit per staked unit per second.
pub const PRECISION: u128 = 1_000_000_000;

pub mod error;
pub mod instructions;
pub mod ledger;
pub mod states;
pub mod utils;

use instructions::*;
use states::{StakePosition, StakingStats};

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "nft-stake",
    project_url: "https://github.com/nft-stake/nft-stake",
    contacts: "email:security@nftstake.io",
    policy: "https://github.com/nft-stake/nft-stake/blob/main/SECURITY.md",
    preferred_languages: "en"
}

#[program]
pub mod nft_stake {

    use super::*;

    pub fn initialise_configs(ctx: Context<InitialiseConfigs>, admin: Pubkey) -> Result<()> {
        instructions::initialise_configs(ctx, admin)
    }

    pub fn update_config(ctx: Context<UpdateConfig>, param: u8, value: u64) -> Result<()> {
        instructions::update_config(ctx, param, value)
    }

    pub fn set_reward_rate(ctx: Context<SetRewardRate>, class_id: u64, rate: u64) -> Result<()> {
        instructions::set_reward_rate(ctx, class_id, rate)
    }

    pub fn fund_rewards(ctx: Context<FundRewards>, amount: u64) -> Result<()> {
        instructions::fund_rewards(ctx, amount)
    }

    pub fn stake(ctx: Context<Stake>, class_id: u64, amount: u64) -> Result<()> {
        instructions::stake(ctx, class_id, amount)
    }

    pub fn claim(ctx: Context<Claim>, class_id: u64) -> Result<()> {
        instructions::claim(ctx, class_id)
    }

    pub fn unstake(ctx: Context<Unstake>, class_id: u64) -> Result<()> {
        instructions::unstake(ctx, class_id)
    }

    pub fn get_reward_rate(ctx: Context<GetRewardRate>, class_id: u64) -> Result<u64> {
        instructions::get_reward_rate(ctx, class_id)
    }

    pub fn get_staking_stats(ctx: Context<GetStakingStats>) -> Result<StakingStats> {
        instructions::get_staking_stats(ctx)
    }

    pub fn get_total_rewards(ctx: Context<GetTotalRewards>, user: Pubkey) -> Result<u64> {
        instructions::get_total_rewards(ctx, user)
    }

    pub fn get_user_stakes(ctx: Context<GetUserStakes>, user: Pubkey) -> Result<Vec<StakePosition>> {
        instructions::get_user_stakes(ctx, user)
    }
}
