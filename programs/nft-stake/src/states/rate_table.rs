use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const RATE_TABLE_SEED: &str = "rate_table";

/// Maximum number of distinct asset classes the table can hold.
pub const MAX_CLASSES: usize = 64;

/// Binds an asset class to its accrual rate and its on-chain asset mint.
///
/// `rate` is fixed-point with scale [`crate::PRECISION`]: reward base units
/// per staked unit per second. A rate of zero is a valid, configured rate
/// (accrual disabled for the class) and is distinct from an absent entry.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateEntry {
    pub class_id: u64,
    pub asset_mint: Pubkey,
    pub rate: u64,
}

impl RateEntry {
    pub const SIZE: usize = 8 + 32 + 8;
}

#[account]
#[derive(Default, Debug)]
pub struct RateTable {
    pub bump: u8,
    pub entries: Vec<RateEntry>,
}

impl RateTable {
    pub const LEN: usize = 8 + 1 + 4 + RateEntry::SIZE * MAX_CLASSES;

    pub fn entry(&self, class_id: u64) -> Result<&RateEntry> {
        self.entries
            .iter()
            .find(|e| e.class_id == class_id)
            .ok_or_else(|| error!(ErrorCode::UnknownClass))
    }

    pub fn rate(&self, class_id: u64) -> Result<u64> {
        Ok(self.entry(class_id)?.rate)
    }

    /// Inserts or updates the entry for `class_id`. The asset mint is bound
    /// on first insert and cannot change afterwards.
    pub fn upsert(&mut self, class_id: u64, asset_mint: Pubkey, rate: u64) -> Result<()> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.class_id == class_id) {
            require_keys_eq!(entry.asset_mint, asset_mint, ErrorCode::InvalidAssetMint);
            entry.rate = rate;
            return Ok(());
        }
        require!(self.entries.len() < MAX_CLASSES, ErrorCode::RateTableFull);
        self.entries.push(RateEntry {
            class_id,
            asset_mint,
            rate,
        });
        Ok(())
    }
}
