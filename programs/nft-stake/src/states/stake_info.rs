use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const STAKE_INFO_SEED: &str = "stake_info";

#[account]
#[derive(Default, Debug)]
pub struct StakeInfo {
    pub bump: u8,
    pub total_staked: u64,
    pub total_rewards_available: u64,
    pub total_positions: u64,
    pub total_rewards_claimed: u64,
    pub total_rewards_funded: u64,
    pub last_update_timestamp: u64,
}

impl StakeInfo {
    pub const LEN: usize = 8 + 1 + 8 * 6;

    /// Credits an opened position to the pool totals.
    pub fn record_open(&mut self, amount: u64, now: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_positions = self
            .total_positions
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.last_update_timestamp = now;
        Ok(())
    }

    /// Removes a closed position's amount from the pool totals.
    pub fn record_close(&mut self, amount: u64, now: u64) -> Result<()> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_positions = self
            .total_positions
            .checked_sub(1)
            .ok_or(ErrorCode::MathOverflow)?;
        self.last_update_timestamp = now;
        Ok(())
    }

    pub fn fund(&mut self, amount: u64) -> Result<()> {
        self.total_rewards_available = self
            .total_rewards_available
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_rewards_funded = self
            .total_rewards_funded
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Debits a settled reward from the pool. The pool is never allowed to go
    /// negative; a claim that exceeds it fails instead.
    pub fn debit_rewards(&mut self, amount: u64) -> Result<()> {
        if amount > self.total_rewards_available {
            return Err(ErrorCode::InsufficientPool.into());
        }
        self.total_rewards_available -= amount;
        self.total_rewards_claimed = self
            .total_rewards_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn stats(&self) -> StakingStats {
        StakingStats {
            total_staked: self.total_staked,
            total_rewards_available: self.total_rewards_available,
        }
    }
}

/// Aggregate counters returned by `get_staking_stats`. The reward figure is
/// the raw pool balance, not reduced by outstanding unclaimed accruals.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StakingStats {
    pub total_staked: u64,
    pub total_rewards_available: u64,
}
