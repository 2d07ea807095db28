use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("No reward rate configured for this class id")]
    UnknownClass,

    #[msg("This asset id is already staked")]
    AlreadyStaked,

    #[msg("Caller does not hold a stake for this asset id")]
    NotOwner,

    #[msg("Position has unsettled rewards and cannot be closed")]
    PendingRewardUnclaimed,

    #[msg("Reward pool cannot cover the settled amount")]
    InsufficientPool,

    #[msg("Clock moved backwards past a settlement timestamp")]
    ClockRegression,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,

    #[msg("Invalid timestamp conversion")]
    InvalidTimestamp,

    #[msg("Clock sysvar is unavailable")]
    ClockUnavailable,

    #[msg("Not approved")]
    NotApproved,

    #[msg("Asset mint does not match the registered mint for this class")]
    InvalidAssetMint,

    #[msg("Invalid reward mint account")]
    InvalidRewardMint,

    #[msg("Maximum number of open positions reached for this user")]
    MaxPositionsReached,

    #[msg("Reward rate table is full")]
    RateTableFull,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Staking is currently disabled")]
    StakingDisabled,

    #[msg("Claims are currently disabled")]
    ClaimsDisabled,

    #[msg("Invalid config parameter")]
    InvalidParam,

    #[msg("Expected account missing from remaining accounts")]
    MissingRemainingAccount,
}
