use anchor_lang::prelude::*;

#[event]
pub struct Staked {
    pub user: Pubkey,
    pub class_id: u64,
    pub amount: u64,
    pub timestamp: u64,
}

#[event]
pub struct Unstaked {
    pub user: Pubkey,
    pub class_id: u64,
    pub amount: u64,
    pub reward: u64,
    pub timestamp: u64,
}

#[event]
pub struct RewardsClaimed {
    pub user: Pubkey,
    pub class_id: u64,
    pub reward: u64,
    pub timestamp: u64,
}

#[event]
pub struct RewardsFunded {
    pub funder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardRateUpdated {
    pub class_id: u64,
    pub asset_mint: Pubkey,
    pub rate: u64,
}

#[event]
pub struct ConfigUpdated {
    pub param: u8,
    pub value: u64,
}
