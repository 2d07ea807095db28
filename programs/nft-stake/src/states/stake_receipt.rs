use anchor_lang::prelude::*;

pub const STAKE_RECEIPT_SEED: &str = "stake_receipt";

/// Per-class custody marker. The PDA is derived from the class id alone, so
/// at most one receipt can exist per id at a time: whoever holds the live
/// receipt holds the stake. Closed (rent refunded) on unstake.
#[account]
#[derive(Default, Debug)]
pub struct StakeReceipt {
    pub bump: u8,
    pub owner: Pubkey,
    pub class_id: u64,
}

impl StakeReceipt {
    pub const LEN: usize = 8 + 1 + 32 + 8;
}
